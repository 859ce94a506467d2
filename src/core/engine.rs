use crate::core::font::FontChain;
use crate::core::renderer::IconRenderer;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{RenderReport, RunSummary};
use crate::domain::ports::WritePolicy;
use crate::utils::error::Result;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

pub const DEFAULT_FILE_NAME: &str = "icon{size}.png";

pub struct IconEngine<S: Storage> {
    storage: S,
    renderer: IconRenderer,
    sizes: Vec<u32>,
    file_name_template: String,
    policy: WritePolicy,
}

impl<S: Storage> IconEngine<S> {
    pub fn new(storage: S, renderer: IconRenderer, sizes: Vec<u32>) -> Self {
        Self {
            storage,
            renderer,
            sizes,
            file_name_template: DEFAULT_FILE_NAME.to_string(),
            policy: WritePolicy::Fail,
        }
    }

    pub fn from_config<C: ConfigProvider>(storage: S, config: &C) -> Self {
        let fonts = FontChain::from_candidates(config.font_candidates());
        tracing::debug!("Font chain: {:?}", fonts.source_names());
        let renderer = IconRenderer::new(fonts, *config.palette(), config.glyph());
        Self {
            storage,
            renderer,
            sizes: config.sizes().to_vec(),
            file_name_template: config.file_name_template().to_string(),
            policy: config.write_policy(),
        }
    }

    pub fn with_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_file_name_template(mut self, template: impl Into<String>) -> Self {
        self.file_name_template = template.into();
        self
    }

    fn file_name(&self, size: u32) -> String {
        self.file_name_template.replace("{size}", &size.to_string())
    }

    /// Paths that a run would write, in order.
    pub fn plan(&self) -> Vec<(u32, PathBuf)> {
        self.sizes
            .iter()
            .map(|&size| (size, self.storage.resolve(&self.file_name(size))))
            .collect()
    }

    /// Renders every size, printing one `Created ...` line per file and a
    /// final summary line to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for &size in &self.sizes {
            let name = self.file_name(size);
            let (bytes, glyph) = self.renderer.render_png(size)?;

            match self.storage.write_file(&name, &bytes) {
                Ok(path) => {
                    tracing::info!("Wrote {} ({}px, glyph: {:?})", path.display(), size, glyph);
                    writeln!(out, "Created {}", path.display())?;
                    summary.created.push(RenderReport { size, path, glyph });
                }
                Err(e) if self.policy == WritePolicy::Skip => {
                    tracing::warn!("Skipping size {}: {}", size, e);
                    summary.skipped.push((size, self.storage.resolve(&name)));
                }
                Err(e) => return Err(e),
            }
        }

        if summary.skipped.is_empty() {
            writeln!(out, "All icons created successfully!")?;
        } else {
            writeln!(
                out,
                "Created {} of {} icons ({} skipped)",
                summary.created.len(),
                summary.total(),
                summary.skipped.len()
            )?;
        }

        Ok(summary)
    }
}
