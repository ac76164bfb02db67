use jog_core::JogError;
use jog_core::conf::{Config, ConfigSource, DEFAULT_TEMPLATE, load_config_str, template};
use jog_core::filter::FilterRequest;
use jog_core::pipeline::Pipeline;
use jog_core::tail::LineHandler;

/// A pipeline writing into memory.
pub struct TestViewer {
    pipeline: Pipeline<Vec<u8>>,
}

impl TestViewer {
    /// The built-in configuration, without line numbers.
    pub fn default_config() -> Config {
        let text = template(DEFAULT_TEMPLATE).expect("missing built-in config");
        let mut config = load_config_str(&text, ConfigSource::Embedded)
            .expect("invalid built-in config")
            .config;
        config.line_no.print = false;
        config
    }

    pub fn plain(request: FilterRequest) -> Self {
        Self::with_config(&Self::default_config(), request)
    }

    /// Output is never colorized.
    pub fn with_config(config: &Config, request: FilterRequest) -> Self {
        let pipeline = Pipeline::from_config(config, &request, false, Vec::new())
            .expect("failed to build pipeline");
        Self { pipeline }
    }

    pub fn raw_json(mut self) -> Self {
        self.pipeline = self.pipeline.with_raw_json(true);
        self
    }

    pub fn feed(&mut self, lines: &[&str]) -> Result<Vec<String>, JogError> {
        for (i, line) in lines.iter().enumerate() {
            self.pipeline.process(i + 1, line)?;
        }
        Ok(self.take_output())
    }

    /// Lines written since the last call.
    pub fn take_output(&mut self) -> Vec<String> {
        let bytes = std::mem::take(self.pipeline.get_mut());
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl LineHandler for TestViewer {
    fn handle(&mut self, line_no: usize, raw: &str) -> Result<(), JogError> {
        self.pipeline.process(line_no, raw)
    }
}
