use crate::domain::ports::DataHarbor;

#[derive(Debug, Clone, Copy, Default)]
pub struct Database;

impl DataHarbor for Database {
    fn save(&self, data: &str) -> String {
        format!("[[{}]]\nSaving note to Database...", data)
    }

    fn retrieve(&self, id: u32) -> String {
        format!("Note {} from Database", id)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CloudStorage;

impl DataHarbor for CloudStorage {
    fn save(&self, data: &str) -> String {
        format!("[[{}]]\nSaving note to Cloud...", data)
    }

    fn retrieve(&self, id: u32) -> String {
        format!("Note {} from Cloud.", id)
    }
}
