//! Page scanners: open a URL in a browser and run axe-core on it.

use anyhow::{Context, Result};
use async_trait::async_trait;
use axe_scan_results::AxeResults;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::SetBypassCspParams;
use chromiumoxide::cdp::js_protocol::runtime::EvaluateParams;
use chromiumoxide::page::Page;
use futures::StreamExt;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Navigation is never timed out in practice; slow pages are still scanned.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

/// Trait for scanning a single page.
#[async_trait]
pub trait PageScanner: Send + Sync {
    /// Load `url` and return the axe-core results for it.
    async fn scan(&self, url: &str) -> Result<AxeResults>;
}

/// What axe-core is asked to do on each page.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// axe-core tags selecting the rules to run.
    pub tags: Vec<String>,
    /// axe-core locale object, `None` for the built-in English.
    pub locale: Option<Value>,
}

/// How the browser is launched.
#[derive(Debug, Clone, Default)]
pub struct ChromeOptions {
    /// Chrome/Chromium executable; detected when `None`.
    pub executable: Option<PathBuf>,
    /// Disable the Chrome sandbox (needed in most containers).
    pub no_sandbox: bool,
}

/// Expression that runs axe-core and resolves to its results as JSON text.
pub fn run_expression(options: &ScanOptions) -> Result<String> {
    let tags = serde_json::to_string(&options.tags)?;
    let locale = match &options.locale {
        Some(locale) => serde_json::to_string(locale)?,
        None => "null".to_string(),
    };

    Ok(format!(
        r#"(async () => {{
  const locale = {locale};
  if (locale) {{
    axe.configure({{ locale }});
  }}
  const results = await axe.run(document, {{ runOnly: {{ type: 'tag', values: {tags} }} }});
  return JSON.stringify(results);
}})()"#
    ))
}

/// Headless Chrome scanner.
pub struct ChromeScanner {
    browser: Browser,
    handler: JoinHandle<()>,
    script: String,
    run_expression: String,
}

impl ChromeScanner {
    /// Launch the browser. `script` is the axe-core source injected into every page.
    pub async fn launch(chrome: &ChromeOptions, script: String, options: &ScanOptions) -> Result<Self> {
        let mut builder = BrowserConfig::builder().request_timeout(REQUEST_TIMEOUT);
        if let Some(ref executable) = chrome.executable {
            builder = builder.chrome_executable(executable);
        }
        if chrome.no_sandbox {
            builder = builder.no_sandbox();
        }
        let config = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid browser configuration: {}", e))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("Failed to launch the browser")?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser event error: {}", e);
                }
            }
        });

        Ok(Self {
            browser,
            handler,
            script,
            run_expression: run_expression(options)?,
        })
    }

    async fn scan_page(&self, page: &Page, url: &str) -> Result<AxeResults> {
        page.execute(SetBypassCspParams::new(true))
            .await
            .context("Failed to bypass the content security policy")?;

        page.goto(url)
            .await
            .with_context(|| format!("Failed to navigate to {}", url))?;
        page.wait_for_navigation()
            .await
            .with_context(|| format!("Failed to load {}", url))?;

        evaluate(page, &self.script, false)
            .await
            .context("Failed to inject axe-core")?;

        let json: String = evaluate(page, &self.run_expression, true)
            .await
            .with_context(|| format!("axe-core failed on {}", url))?
            .into_value()
            .context("axe-core returned no results")?;

        serde_json::from_str(&json).context("Failed to parse axe-core results")
    }

    /// Shut the browser down.
    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .context("Failed to close the browser")?;
        if let Err(e) = self.browser.wait().await {
            warn!("Browser did not exit cleanly: {}", e);
        }
        self.handler.await.ok();
        Ok(())
    }
}

async fn evaluate(
    page: &Page,
    expression: &str,
    by_value: bool,
) -> Result<chromiumoxide::js::EvaluationResult> {
    let params = EvaluateParams::builder()
        .expression(expression)
        .await_promise(by_value)
        .return_by_value(by_value)
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid evaluation: {}", e))?;
    Ok(page.evaluate_expression(params).await?)
}

#[async_trait]
impl PageScanner for ChromeScanner {
    async fn scan(&self, url: &str) -> Result<AxeResults> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("Failed to open a browser page")?;

        let result = self.scan_page(&page, url).await;

        if let Err(e) = page.close().await {
            warn!("Failed to close page for {}: {}", url, e);
        }

        result
    }
}
