use contracts::domain::a010_air_refund::aggregate::{AirRefund, RefundStatus};
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a010_refunds")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub passenger_name: String,
    pub pnr: String,
    pub ticket_number: Option<String>,
    pub airline: Option<String>,
    pub actual_fare: f64,
    pub used_amount: f64,
    pub service_charge: f64,
    pub penalty: f64,
    pub refund_amount: f64,
    pub refund_date: Option<Date>,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AirRefund {
    fn from(m: Model) -> Self {
        AirRefund {
            id: m.id,
            passenger_name: m.passenger_name,
            pnr: m.pnr,
            ticket_number: m.ticket_number,
            airline: m.airline,
            actual_fare: m.actual_fare,
            used_amount: m.used_amount,
            service_charge: m.service_charge,
            penalty: m.penalty,
            refund_amount: m.refund_amount,
            refund_date: m.refund_date,
            status: RefundStatus::from_code(&m.status).unwrap_or_default(),
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

pub struct Repository;

impl AggregateTable for Repository {
    type Aggregate = AirRefund;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(r: &AirRefund) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(r.id.clone()),
            passenger_name: Set(r.passenger_name.clone()),
            pnr: Set(r.pnr.clone()),
            ticket_number: Set(r.ticket_number.clone()),
            airline: Set(r.airline.clone()),
            actual_fare: Set(r.actual_fare),
            used_amount: Set(r.used_amount),
            service_charge: Set(r.service_charge),
            penalty: Set(r.penalty),
            refund_amount: Set(r.refund_amount),
            refund_date: Set(r.refund_date),
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
                    .add(contains_text(Column::TicketNumber, q))
                    .add(contains_text(Column::Airline, q)),
            );
        }
        if let Some(status) = query.status.as_deref() {
            condition = condition.add(Column::Status.eq(status));
        }
        condition
    }
}
