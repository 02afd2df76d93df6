use crate::shared::infrastructure::id_generator::IdGenerator;
use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7IdGenerator;

impl IdGenerator for UuidV7IdGenerator {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
