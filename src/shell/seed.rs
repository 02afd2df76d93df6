// Sample users, locations, events and participants for local runs.

use crate::modules::planner::core::errors::ApplicationError;
use crate::modules::planner::store::PlannerStore;
use crate::modules::planner::use_cases::manage_events::command::AddEvent;
use tracing::info;

pub async fn seed_sample_data(store: &PlannerStore) -> Result<(), ApplicationError> {
    let ali = store.add_user("Ali").await?;
    let veli = store.add_user("Veli").await?;
    let istanbul = store.add_location("Istanbul").await?;
    let ankara = store.add_location("Ankara").await?;

    let concert = store
        .add_event(AddEvent {
            title: "Konsere Katılım".into(),
            user_id: ali.id,
            location_id: istanbul.id,
            description: "Bu etkinlik, konser hakkında bilgiler içerir.".into(),
            time: "2025-02-15 20:00".into(),
        })
        .await?;
    let workshop = store
        .add_event(AddEvent {
            title: "Kodlama Atölyesi".into(),
            user_id: veli.id,
            location_id: ankara.id,
            description: "React ile ilgili ileri düzey kodlama atölyesi.".into(),
            time: "2025-02-20 10:00".into(),
        })
        .await?;

    store
        .add_participant("Mehmet", Some(concert.id.clone()))
        .await?;
    store.add_participant("Ayşe", Some(concert.id)).await?;
    store.add_participant("Fatma", Some(workshop.id)).await?;

    info!("sample data seeded");
    Ok(())
}
