use crate::domain::model::DemoKind;
use crate::domain::ports::{ConfigProvider, Demo};
use crate::utils::error::Result;
use std::io::Write;

pub struct DemoRunner {
    demos: Vec<Box<dyn Demo>>,
}

impl DemoRunner {
    pub fn new(demos: Vec<Box<dyn Demo>>) -> Self {
        Self { demos }
    }

    pub fn from_config(kinds: &[DemoKind], config: &dyn ConfigProvider) -> Self {
        Self::new(kinds.iter().map(|kind| kind.build(config)).collect())
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// Runs every demo in order and stops at the first failure. A banner
    /// separates the demos when there is more than one.
    pub fn run(&self, out: &mut dyn Write) -> Result<usize> {
        let with_banners = self.demos.len() > 1;

        for (index, demo) in self.demos.iter().enumerate() {
            let kind = demo.kind();
            tracing::info!("Running {} demo", kind.title());

            if with_banners {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "=== {} ===", kind.title())?;
            }

            demo.run(out)?;
            tracing::debug!("Finished {:?} demo", kind);
        }

        out.flush()?;
        Ok(self.demos.len())
    }
}
