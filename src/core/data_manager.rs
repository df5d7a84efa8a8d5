use crate::domain::ports::DataHarbor;

/// High-level note handling that only sees the `DataHarbor` abstraction.
pub struct DataManager<H: DataHarbor> {
    harbor: H,
}

impl<H: DataHarbor> DataManager<H> {
    pub fn new(harbor: H) -> Self {
        Self { harbor }
    }

    pub fn send_data(&self, note: &str) -> String {
        tracing::debug!("Sending {} byte note", note.len());
        self.harbor.save(note)
    }

    pub fn get_data(&self, id: u32) -> String {
        tracing::debug!("Retrieving note {}", id);
        self.harbor.retrieve(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockHarbor {
        saved: RefCell<Vec<String>>,
    }

    impl DataHarbor for MockHarbor {
        fn save(&self, data: &str) -> String {
            self.saved.borrow_mut().push(data.to_string());
            "saved".to_string()
        }

        fn retrieve(&self, id: u32) -> String {
            self.saved
                .borrow()
                .get(id as usize)
                .cloned()
                .unwrap_or_default()
        }
    }

    #[test]
    fn test_manager_delegates_to_any_harbor() {
        let manager = DataManager::new(MockHarbor::default());

        assert_eq!(manager.send_data("first"), "saved");
        assert_eq!(manager.send_data("second"), "saved");
        assert_eq!(manager.get_data(1), "second");
        assert_eq!(manager.get_data(9), "");
    }
}
