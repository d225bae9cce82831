use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{info, instrument};

use models::customer::{self, CustomerInput};

use crate::{db::query::prefix_ci, errors::ServiceError, pagination::{self, Pagination}};

const DUPLICATE_CPF: &str = "cpf already registered";

/// List customers, optionally filtered by cpf prefix.
pub async fn list_customers(
    db: &DatabaseConnection,
    cpf_prefix: Option<&str>,
    page: Option<Pagination>,
) -> Result<Vec<customer::Model>, ServiceError> {
    let mut finder = customer::Entity::find().order_by_asc(customer::Column::Id);
    if let Some(prefix) = cpf_prefix.filter(|p| !p.is_empty()) {
        finder = finder.filter(prefix_ci((customer::Entity, customer::Column::Cpf), prefix));
    }
    Ok(pagination::apply(finder, page).all(db).await?)
}

/// Get a customer by id.
pub async fn get_customer(db: &DatabaseConnection, id: i32) -> Result<customer::Model, ServiceError> {
    customer::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("customer"))
}

/// Register a customer; cpf is unique.
#[instrument(skip(db, input))]
pub async fn create_customer(
    db: &DatabaseConnection,
    input: &CustomerInput,
) -> Result<customer::Model, ServiceError> {
    input.validate()?;
    if customer::find_by_cpf(db, &input.cpf, None).await?.is_some() {
        return Err(ServiceError::Conflict(DUPLICATE_CPF.into()));
    }
    let am = customer::ActiveModel {
        name: Set(input.name.trim().to_string()),
        phone: Set(input.phone.clone()),
        cpf: Set(input.cpf.clone()),
        birthday: Set(input.birthday()?),
        ..Default::default()
    };
    let created = am.insert(db).await.map_err(|e| ServiceError::from_db(e, DUPLICATE_CPF))?;
    info!(customer_id = created.id, "customer_created");
    Ok(created)
}

/// Replace every field of an existing customer.
///
/// The cpf uniqueness check ignores the customer being updated, so
/// resubmitting an unchanged cpf succeeds.
#[instrument(skip(db, input))]
pub async fn update_customer(
    db: &DatabaseConnection,
    id: i32,
    input: &CustomerInput,
) -> Result<customer::Model, ServiceError> {
    input.validate()?;
    let existing = get_customer(db, id).await?;
    if customer::find_by_cpf(db, &input.cpf, Some(id)).await?.is_some() {
        return Err(ServiceError::Conflict(DUPLICATE_CPF.into()));
    }
    let mut am: customer::ActiveModel = existing.into();
    am.name = Set(input.name.trim().to_string());
    am.phone = Set(input.phone.clone());
    am.cpf = Set(input.cpf.clone());
    am.birthday = Set(input.birthday()?);
    let updated = am.update(db).await.map_err(|e| ServiceError::from_db(e, DUPLICATE_CPF))?;
    info!(customer_id = updated.id, "customer_updated");
    Ok(updated)
}
