use crate::streams::SampleStream;
use std::io::Error;

pub struct VecStream {
    pub label: String,
    pub values: Vec<f32>,
    idx: usize,
}

impl VecStream {
    pub fn new(label: impl Into<String>, values: Vec<f32>) -> Self {
        Self {
            label: label.into(),
            values,
            idx: 0,
        }
    }
}

impl SampleStream for VecStream {
    fn label(&self) -> &str {
        &self.label
    }

    fn has_more_samples(&self) -> bool {
        self.idx < self.values.len()
    }

    fn next_sample(&mut self) -> Option<f32> {
        let v = self.values.get(self.idx).copied()?;
        self.idx += 1;
        Some(v)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
