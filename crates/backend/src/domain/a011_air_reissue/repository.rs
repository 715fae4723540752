use contracts::domain::a011_air_reissue::aggregate::{AirReissue, ReissueStatus};
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a011_reissues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub passenger_name: String,
    pub pnr: String,
    pub old_ticket_number: Option<String>,
    pub new_ticket_number: Option<String>,
    pub fare_difference: f64,
    pub tax_difference: f64,
    pub service_fee: f64,
    pub penalty: f64,
    pub total_amount: f64,
    pub reissue_date: Option<Date>,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AirReissue {
    fn from(m: Model) -> Self {
        AirReissue {
            id: m.id,
            passenger_name: m.passenger_name,
            pnr: m.pnr,
            old_ticket_number: m.old_ticket_number,
            new_ticket_number: m.new_ticket_number,
            fare_difference: m.fare_difference,
            tax_difference: m.tax_difference,
            service_fee: m.service_fee,
            penalty: m.penalty,
            total_amount: m.total_amount,
            reissue_date: m.reissue_date,
            status: ReissueStatus::from_code(&m.status).unwrap_or_default(),
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

pub struct Repository;

impl AggregateTable for Repository {
    type Aggregate = AirReissue;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(r: &AirReissue) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(r.id.clone()),
            passenger_name: Set(r.passenger_name.clone()),
            pnr: Set(r.pnr.clone()),
            old_ticket_number: Set(r.old_ticket_number.clone()),
            new_ticket_number: Set(r.new_ticket_number.clone()),
            fare_difference: Set(r.fare_difference),
            tax_difference: Set(r.tax_difference),
            service_fee: Set(r.service_fee),
            penalty: Set(r.penalty),
            total_amount: Set(r.total_amount),
            reissue_date: Set(r.reissue_date),
            status: Set(r.status.code().to_string()),
            is_deleted: Set(false),
            created_at: Set(r.metadata.created_at),
            updated_at: Set(r.metadata.updated_at),
        })
    }

    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::PassengerName, q))
                    .add(contains_text(Column::Pnr, &q.to_uppercase()))
                    .add(contains_text(Column::OldTicketNumber, q))
                    .add(contains_text(Column::NewTicketNumber, q)),
            );
        }
        if let Some(status) = query.status.as_deref() {
            condition = condition.add(Column::Status.eq(status));
        }
        condition
    }
}
