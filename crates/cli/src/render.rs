//! Template rendering via minijinja.
//!
//! Responsibilities:
//! - Render a template source string against a parsed `Context`.
//!
//! Non-responsibilities:
//! - Building the context (see `stencil-context`).
//! - Deciding where the rendered text goes (see `main`).

use anyhow::Context as _;
use minijinja::Environment;
use stencil_context::Context;

/// Render `source` with `context` as the variable namespace.
///
/// `name` is only used in error messages so the user sees which template
/// failed.
pub fn render(name: &str, source: &str, context: &Context) -> anyhow::Result<String> {
    let mut env = Environment::new();
    env.add_template(name, source)
        .with_context(|| format!("template '{name}' failed to parse"))?;
    let template = env.get_template(name)?;
    template
        .render(context)
        .with_context(|| format!("template '{name}' failed to render"))
}
