use crate::tui::BrowserRenderer;
use anyhow::Result;
use vsview_runtime::{Config, FetchWorker, NavigationController};

pub fn handle(config: &Config) -> Result<()> {
    let client = super::http_client(config)?;
    let (worker, responses) = FetchWorker::spawn(client)?;

    let mut controller = NavigationController::new(config.root_path.clone(), config.column_count);
    worker.submit(controller.start())?;

    BrowserRenderer::new(controller).run(&worker, responses)
}
