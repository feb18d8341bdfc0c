use depgraph_view::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that keeps every presented document
#[derive(Default, Clone)]
pub struct MockPresenter {
    pub outputs: Arc<Mutex<Vec<String>>>,
}

impl MockPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.outputs.lock().unwrap().last().cloned()
    }
}

impl OutputPresenter for MockPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.outputs.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
