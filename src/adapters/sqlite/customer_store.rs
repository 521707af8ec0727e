//! SQLite implementation of the `CustomerStore` gateway.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Customer, CustomerId};
use crate::domain::ports::CustomerStore;

#[derive(Clone)]
pub struct SqliteCustomerStore {
    pool: SqlitePool,
}

impl SqliteCustomerStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for SqliteCustomerStore {
    async fn insert(&self, customer: &Customer) -> DomainResult<u64> {
        let result = sqlx::query(
            r#"INSERT INTO customers (id, company_name, contact_name, contact_title,
               address, city, region, postal_code, country, phone, fax,
               created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(customer.id.as_str())
        .bind(&customer.company_name)
        .bind(&customer.contact_name)
        .bind(&customer.contact_title)
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.region)
        .bind(&customer.postal_code)
        .bind(&customer.country)
        .bind(&customer.phone)
        .bind(&customer.fax)
        .bind(customer.created_at.to_rfc3339())
        .bind(customer.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected()),
            // The store is the authority on key uniqueness: a refused
            // duplicate insert reports 0 rows affected, same as any other
            // no-op write.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, customer: &Customer) -> DomainResult<u64> {
        let result = sqlx::query(
            r#"UPDATE customers SET company_name = ?, contact_name = ?, contact_title = ?,
               address = ?, city = ?, region = ?, postal_code = ?, country = ?,
               phone = ?, fax = ?, updated_at = ?
               WHERE id = ?"#,
        )
        .bind(&customer.company_name)
        .bind(&customer.contact_name)
        .bind(&customer.contact_title)
        .bind(&customer.address)
        .bind(&customer.city)
        .bind(&customer.region)
        .bind(&customer.postal_code)
        .bind(&customer.country)
        .bind(&customer.phone)
        .bind(&customer.fax)
        .bind(customer.updated_at.to_rfc3339())
        .bind(customer.id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &CustomerId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find(&self, id: &CustomerId) -> DomainResult<Option<Customer>> {
        let row: Option<CustomerRow> = sqlx::query_as("SELECT * FROM customers WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.try_into()).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<Customer>> {
        let rows: Vec<CustomerRow> = sqlx::query_as("SELECT * FROM customers ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: String,
    company_name: String,
    contact_name: Option<String>,
    contact_title: Option<String>,
    address: Option<String>,
    city: Option<String>,
    region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
    phone: Option<String>,
    fax: Option<String>,
    created_at: String,
    updated_at: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = crate::domain::errors::DomainError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let created_at = super::parse_datetime(&row.created_at)?;
        let updated_at = super::parse_datetime(&row.updated_at)?;

        Ok(Customer {
            id: CustomerId::new(&row.id)?,
            company_name: row.company_name,
            contact_name: row.contact_name,
            contact_title: row.contact_title,
            address: row.address,
            city: row.city,
            region: row.region,
            postal_code: row.postal_code,
            country: row.country,
            phone: row.phone,
            fax: row.fax,
            created_at,
            updated_at,
        })
    }
}
