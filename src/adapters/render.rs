use crate::domain::model::Site;
use crate::domain::ports::Renderer;
use crate::utils::error::Result;
use minijinja::{context, Environment, UndefinedBehavior};

/// Jinja 相容的模板渲染；模板可使用 `sites` 與 `generated_at`
pub struct JinjaRenderer {
    strict: bool,
}

impl JinjaRenderer {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// 引用不存在的欄位時直接報錯，而不是輸出空字串
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

impl Default for JinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for JinjaRenderer {
    fn render(&self, template: &str, sites: &[Site]) -> Result<String> {
        let mut env = Environment::new();
        if self.strict {
            env.set_undefined_behavior(UndefinedBehavior::Strict);
        }

        let generated_at = chrono::Utc::now().to_rfc3339();
        let output = env.render_str(template, context! { sites => sites, generated_at => generated_at })?;
        Ok(output)
    }
}
