//! Text rendering for files and messages monogen generates itself.
//! Template files are never rendered; they only go through token substitution.
use crate::error::Result;
use minijinja::Environment;
use serde::Serialize;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

/// Serializes `context` and renders `template` with it.
pub fn render_with<S: Serialize>(
    renderer: &dyn TemplateRenderer,
    template: &str,
    context: &S,
) -> Result<String> {
    let context = serde_json::to_value(context).map_err(|e| {
        crate::error::Error::RenderError(minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            format!("context serialization failed: {e}"),
        ))
    })?;
    renderer.render(template, &context)
}
