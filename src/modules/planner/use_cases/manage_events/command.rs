#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEvent {
    pub title: String,
    pub user_id: String,
    pub location_id: String,
    pub description: String,
    pub time: String,
}
