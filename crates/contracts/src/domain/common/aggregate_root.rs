use serde::de::DeserializeOwned;
use serde::Serialize;

use super::EntityMetadata;
use crate::shared::validation::FieldErrors;

/// Form payload of an aggregate (the body of POST and PUT requests)
pub trait FormDto: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Field-level validation, run by the form before submit and by the
    /// server before every write
    fn validate(&self) -> Result<(), FieldErrors>;

    /// Initial value of an empty add form
    ///
    /// Unlike `Default`, which is what a request body with missing keys
    /// decodes to, this may pre-fill fields for the user.
    fn blank() -> Self {
        Self::default()
    }
}

/// Root of an aggregate exposed through the REST API
///
/// Instance methods describe one record, the static ones describe the
/// collection: where it lives on the server, how it is named in the UI and
/// under which client route its pages are mounted.
pub trait AggregateRoot: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Dto: FormDto;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Record id (`id` or `_id` on the wire)
    fn id(&self) -> &str;

    /// Human readable title used in tables, search hits and dialogs
    fn title(&self) -> String;

    /// Secondary line for search hits (phone, PNR, city)
    fn subtitle(&self) -> Option<String> {
        None
    }

    /// Lifecycle timestamps
    fn metadata(&self) -> &EntityMetadata;

    /// Form values for the edit page
    fn to_dto(&self) -> Self::Dto;

    /// Build the stored record from a validated form, recomputing every
    /// derived amount
    fn from_dto(id: String, dto: Self::Dto, metadata: EntityMetadata) -> Self;

    // ============================================================================
    // Collection metadata
    // ============================================================================

    /// Aggregate index in the system (for example "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name, also the plural key some endpoints wrap lists in
    fn collection_name() -> &'static str;

    /// REST path of the collection (for example "/api/assets")
    fn api_path() -> &'static str;

    /// Client route prefix (for example "/assets")
    fn route_base() -> &'static str;

    /// UI name of a single element
    fn element_name() -> &'static str;

    /// UI name of the list
    fn list_name() -> &'static str;

    // ============================================================================
    // Defaults
    // ============================================================================

    /// Full aggregate name (for example "a001_assets"), also the table name
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// REST path of a single record
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::api_path(), id)
    }

    /// Client route of the list page
    fn list_route() -> String {
        format!("{}/list", Self::route_base())
    }

    /// Client route of the add form
    fn add_route() -> String {
        format!("{}/add", Self::route_base())
    }

    /// Client route of the detail page
    fn detail_route(id: &str) -> String {
        format!("{}/{}", Self::route_base(), id)
    }

    /// Client route of the edit form
    fn edit_route(id: &str) -> String {
        format!("{}/{}/edit", Self::route_base(), id)
    }
}
