use contracts::domain::a012_hotel_contract::aggregate::{ContractStatus, HotelCity, HotelContract};
use contracts::domain::common::EntityMetadata;
use contracts::shared::list::ListQuery;
use sea_orm::entity::prelude::*;
use sea_orm::{Condition, Set};

use crate::domain::common::{contains_text, AggregateTable};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a012_contracts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub hotel_name: String,
    pub city: String,
    pub contract_number: Option<String>,
    pub check_in: Option<Date>,
    pub check_out: Option<Date>,
    pub room_type: Option<String>,
    pub rooms: i32,
    pub rate_per_night_sar: f64,
    pub sar_rate: f64,
    pub paid_amount: f64,
    pub notes: Option<String>,
    pub status: String,
    pub nights: i64,
    pub total_sar: f64,
    pub total_bdt: f64,
    pub due_amount: f64,
    pub is_deleted: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HotelContract {
    fn from(m: Model) -> Self {
        HotelContract {
            id: m.id,
            hotel_name: m.hotel_name,
            city: HotelCity::from_code(&m.city).unwrap_or_default(),
            contract_number: m.contract_number,
            check_in: m.check_in,
            check_out: m.check_out,
            room_type: m.room_type,
            rooms: u32::try_from(m.rooms).unwrap_or(0),
            rate_per_night_sar: m.rate_per_night_sar,
            sar_rate: m.sar_rate,
            paid_amount: m.paid_amount,
            notes: m.notes,
            status: ContractStatus::from_code(&m.status).unwrap_or_default(),
            nights: m.nights,
            total_sar: m.total_sar,
            total_bdt: m.total_bdt,
            due_amount: m.due_amount,
            metadata: EntityMetadata {
                created_at: m.created_at,
                updated_at: m.updated_at,
            },
        }
    }
}

pub struct Repository;

impl AggregateTable for Repository {
    type Aggregate = HotelContract;
    type Entity = Entity;
    type ActiveModel = ActiveModel;

    fn active_model(c: &HotelContract) -> anyhow::Result<ActiveModel> {
        Ok(ActiveModel {
            id: Set(c.id.clone()),
            hotel_name: Set(c.hotel_name.clone()),
            city: Set(c.city.code().to_string()),
            contract_number: Set(c.contract_number.clone()),
            check_in: Set(c.check_in),
            check_out: Set(c.check_out),
            room_type: Set(c.room_type.clone()),
            rooms: Set(i32::try_from(c.rooms)?),
            rate_per_night_sar: Set(c.rate_per_night_sar),
            sar_rate: Set(c.sar_rate),
            paid_amount: Set(c.paid_amount),
            notes: Set(c.notes.clone()),
            status: Set(c.status.code().to_string()),
            nights: Set(c.nights),
            total_sar: Set(c.total_sar),
            total_bdt: Set(c.total_bdt),
            due_amount: Set(c.due_amount),
            is_deleted: Set(false),
            created_at: Set(c.metadata.created_at),
            updated_at: Set(c.metadata.updated_at),
        })
    }

    /// `type` filters by city (makkah / madinah)
    fn filters(query: &ListQuery) -> Condition {
        let mut condition = Condition::all();
        if let Some(q) = query.search() {
            condition = condition.add(
                Condition::any()
                    .add(contains_text(Column::HotelName, q))
                    .add(contains_text(Column::ContractNumber, q)),
            );
        }
        if let Some(status) = query.status.as_deref() {
            condition = condition.add(Column::Status.eq(status));
        }
        if let Some(city) = query.kind.as_deref() {
            condition = condition.add(Column::City.eq(city));
        }
        condition
    }
}
