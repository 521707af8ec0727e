//! Customer CLI commands: the API boundary over the repository.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::sync::Arc;

use crate::adapters::cache::CustomerCache;
use crate::cli::commands::{load_config, open_repository};
use crate::cli::output::{customer_table, output, CommandOutput};
use crate::domain::models::Customer;
use crate::domain::ports::CustomerRepository;

#[derive(Args, Debug)]
pub struct CustomerArgs {
    #[command(subcommand)]
    pub command: CustomerCommands,
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// List customers, optionally filtered by country
    List {
        /// Only show customers in this country (exact match)
        #[arg(short, long)]
        country: Option<String>,
    },
    /// Show one customer by id
    Show {
        /// Customer id (case-insensitive)
        id: String,
    },
    /// Add a new customer
    Add {
        /// Customer id (normalized to uppercase)
        id: String,
        /// Company name
        company: String,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        fax: Option<String>,
    },
    /// Replace fields of an existing customer
    Update {
        /// Customer id (case-insensitive)
        id: String,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        region: Option<String>,
        #[arg(long)]
        postal_code: Option<String>,
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        fax: Option<String>,
    },
    /// Remove a customer by id
    Remove {
        /// Customer id (case-insensitive)
        id: String,
    },
}

#[derive(Debug, Serialize)]
struct CustomerListOutput {
    customers: Vec<Customer>,
    total: usize,
}

impl CommandOutput for CustomerListOutput {
    fn to_human(&self) -> String {
        if self.customers.is_empty() {
            return "No customers found.".to_string();
        }
        format!(
            "{}\n{} customer(s)",
            customer_table(&self.customers),
            self.total
        )
    }
}

#[derive(Debug, Serialize)]
struct CustomerDetailOutput {
    customer: Customer,
}

impl CommandOutput for CustomerDetailOutput {
    fn to_human(&self) -> String {
        let c = &self.customer;
        let mut lines = vec![
            format!("ID:       {}", c.id),
            format!("Company:  {}", c.company_name),
        ];
        let optional = [
            ("Contact", &c.contact_name),
            ("Title", &c.contact_title),
            ("Address", &c.address),
            ("City", &c.city),
            ("Region", &c.region),
            ("Postal", &c.postal_code),
            ("Country", &c.country),
            ("Phone", &c.phone),
            ("Fax", &c.fax),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                lines.push(format!("{label}:{}{value}", " ".repeat(9 - label.len())));
            }
        }
        lines.join("\n")
    }
}

#[derive(Debug, Serialize)]
struct MessageOutput {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

impl CommandOutput for MessageOutput {
    fn to_human(&self) -> String {
        match &self.warning {
            Some(warning) => format!("{}\nwarning: {}", self.message, warning),
            None => self.message.clone(),
        }
    }
}

#[allow(clippy::too_many_lines)]
pub async fn execute(args: CustomerArgs, json: bool) -> Result<()> {
    let config = load_config()?;
    let cache = Arc::new(CustomerCache::new());
    let repo = open_repository(&config, cache).await?;

    match args.command {
        CustomerCommands::List { country } => {
            let mut customers = repo.retrieve_all().await?;
            if let Some(country) = country {
                // Equality filter over the in-memory snapshot.
                customers.retain(|c| c.is_in_country(&country));
            }
            customers.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
            let total = customers.len();
            output(&CustomerListOutput { customers, total }, json);
        }

        CustomerCommands::Show { id } => match repo.retrieve(&id).await? {
            Some(customer) => output(&CustomerDetailOutput { customer }, json),
            None => return Err(anyhow!("customer {} not found", id.to_uppercase())),
        },

        CustomerCommands::Add {
            id,
            company,
            contact,
            title,
            address,
            city,
            region,
            postal_code,
            country,
            phone,
            fax,
        } => {
            let mut customer = Customer::new(&id, company)?;
            customer.contact_name = contact;
            customer.contact_title = title;
            customer.address = address;
            customer.city = city;
            customer.region = region;
            customer.postal_code = postal_code;
            customer.country = country;
            customer.phone = phone;
            customer.fax = fax;

            let created = repo.create(customer).await?;
            output(
                &MessageOutput {
                    message: format!("Created customer {}", created.id),
                    warning: None,
                },
                json,
            );
        }

        CustomerCommands::Update {
            id,
            company,
            contact,
            title,
            address,
            city,
            region,
            postal_code,
            country,
            phone,
            fax,
        } => {
            // Existence pre-check so a missing customer reads as
            // not-found rather than a refused store write.
            let Some(mut customer) = repo.retrieve(&id).await? else {
                return Err(anyhow!("customer {} not found", id.to_uppercase()));
            };

            if let Some(company) = company {
                customer.company_name = company;
            }
            customer.contact_name = contact.or(customer.contact_name);
            customer.contact_title = title.or(customer.contact_title);
            customer.address = address.or(customer.address);
            customer.city = city.or(customer.city);
            customer.region = region.or(customer.region);
            customer.postal_code = postal_code.or(customer.postal_code);
            customer.country = country.or(customer.country);
            customer.phone = phone.or(customer.phone);
            customer.fax = fax.or(customer.fax);
            customer.updated_at = chrono::Utc::now();

            let updated = repo.update(&id, customer).await?;
            output(
                &MessageOutput {
                    message: format!("Updated customer {}", updated.id),
                    warning: None,
                },
                json,
            );
        }

        CustomerCommands::Remove { id } => {
            let evicted = repo.delete(&id).await?;
            let warning = if evicted {
                None
            } else {
                Some("durable delete succeeded but the cache held no entry".to_string())
            };
            output(
                &MessageOutput {
                    message: format!("Deleted customer {}", id.to_uppercase()),
                    warning,
                },
                json,
            );
        }
    }

    Ok(())
}
