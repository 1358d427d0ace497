//! Product repository
//!
//! Two single-statement operations over a `DatabaseHandle`. Every value is
//! bound through a named placeholder; statement text is fixed at compile
//! time. Driver errors are logged here and collapsed into
//! `RepositoryError::WriteFailed`.

use std::time::Instant;

use prodstore_core::errors::RepositoryError;
use prodstore_core::model::{encode_properties, Product, ProductId};
use prodstore_core::{log_op_end, log_op_error, log_op_start};
use prodstore_core_types::RequestId;
use rusqlite::named_params;

use crate::handle::DatabaseHandle;

const OP_CREATE: &str = "create_product";
const OP_DELETE: &str = "delete_product";

const INSERT_PRODUCT: &str = "INSERT INTO products (name, ean_code, units, price, category, properties)
     VALUES (:name, :ean_code, :units, :price, :category, :properties)";

const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = :id";

/// Create and delete products through a database handle
///
/// Holds no state besides the handle and an optional request id used to
/// correlate log events. Each call is one blocking statement with no
/// explicit transaction and no retry.
pub struct ProductRepository<H> {
    handle: H,
    request_id: Option<RequestId>,
}

impl<H: DatabaseHandle> ProductRepository<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle,
            request_id: None,
        }
    }

    /// Tag every log event emitted by this repository with `request_id`
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn into_inner(self) -> H {
        self.handle
    }

    /// Insert `product` and return the id the store assigned to it
    ///
    /// `properties` is written comma-joined, or NULL when absent.
    ///
    /// # Errors
    ///
    /// `RepositoryError::WriteFailed` if the insert fails for any reason
    /// (constraint violation, missing table, I/O) or does not insert
    /// exactly one row. No row is left behind in that case.
    pub fn create(&self, product: &Product) -> Result<ProductId, RepositoryError> {
        let started = Instant::now();
        log_op_start!(
            OP_CREATE,
            request_id = self.request_id(),
            category = product.category.as_str()
        );

        let properties = encode_properties(product.properties.as_ref());

        let outcome = self.handle.execute_statement(
            INSERT_PRODUCT,
            named_params! {
                ":name": product.name,
                ":ean_code": product.ean_code,
                ":units": product.units,
                ":price": product.price,
                ":category": product.category,
                ":properties": properties
            },
        );

        match outcome {
            Ok(1) => {
                let id = ProductId::new(self.handle.last_insert_id());
                log_op_end!(
                    OP_CREATE,
                    duration_ms = elapsed_ms(started),
                    request_id = self.request_id(),
                    product_id = id.get()
                );
                Ok(id)
            }
            Ok(rows) => Err(self.write_failed(
                OP_CREATE,
                started,
                &format!("insert affected {} rows, expected 1", rows),
            )),
            Err(e) => Err(self.write_failed(OP_CREATE, started, &e.to_string())),
        }
    }

    /// Delete the product with `id`
    ///
    /// Returns `true` if a row was removed and `false` if no row had that id.
    /// The row is not read or validated beforehand.
    ///
    /// # Errors
    ///
    /// `RepositoryError::WriteFailed` only when the statement cannot be
    /// executed. A missing id is `Ok(false)`, not an error.
    pub fn delete_by_id(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let started = Instant::now();
        log_op_start!(
            OP_DELETE,
            request_id = self.request_id(),
            product_id = id.get()
        );

        match self
            .handle
            .execute_statement(DELETE_PRODUCT, named_params! { ":id": id.get() })
        {
            Ok(rows) => {
                log_op_end!(
                    OP_DELETE,
                    duration_ms = elapsed_ms(started),
                    request_id = self.request_id(),
                    product_id = id.get(),
                    rows_affected = rows
                );
                Ok(rows > 0)
            }
            Err(e) => Err(self.write_failed(OP_DELETE, started, &e.to_string())),
        }
    }

    fn request_id(&self) -> Option<&str> {
        self.request_id.as_ref().map(RequestId::as_str)
    }

    fn write_failed(&self, op: &'static str, started: Instant, detail: &str) -> RepositoryError {
        let err = RepositoryError::WriteFailed { op };
        log_op_error!(
            op,
            err,
            duration_ms = elapsed_ms(started),
            request_id = self.request_id(),
            err.detail = detail
        );
        err
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
