pub mod translate;

use async_trait::async_trait;

/// Translates a snippet of text between the configured language pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator {
    async fn translate(&self, text: &str) -> anyhow::Result<String>;
}

pub type ImplTranslator = Box<dyn Translator>;
