use crate::modules::planner::use_cases::manage_events::command::AddEvent;

pub struct AddEventBuilder {
    inner: AddEvent,
}

impl Default for AddEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: AddEvent {
                title: "Concert".to_string(),
                user_id: "1".to_string(),
                location_id: "1".to_string(),
                description: "d".to_string(),
                time: "2025-02-15 20:00".to_string(),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn location_id(mut self, v: impl Into<String>) -> Self {
        self.inner.location_id = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = v.into();
        self
    }

    pub fn build(self) -> AddEvent {
        self.inner
    }
}

#[cfg(test)]
mod add_event_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = AddEventBuilder::default().build();
        assert_eq!(built, AddEventBuilder::new().build());
        assert_eq!(built.title, "Concert");
        assert_eq!(built.time, "2025-02-15 20:00");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = AddEventBuilder::new()
            .title("Workshop")
            .user_id("u-2")
            .location_id("l-2")
            .description("desc")
            .time("2025-02-20 10:00")
            .build();

        assert_eq!(
            custom,
            AddEvent {
                title: "Workshop".into(),
                user_id: "u-2".into(),
                location_id: "l-2".into(),
                description: "desc".into(),
                time: "2025-02-20 10:00".into(),
            }
        );
    }
}
