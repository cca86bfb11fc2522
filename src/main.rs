use clap::Parser;
use notion_notices::NoticeCrawler;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match args.to_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };

    let crawler = match NoticeCrawler::new(config) {
        Ok(crawler) => crawler,
        Err(e) => {
            ::log::error!("{}", e);
            std::process::exit(2);
        }
    };

    if let Some(path) = &args.extract_file {
        extract_file(&crawler, path);
        return;
    }

    println!("Note: crawling requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using {}",
        crawler.config().webdriver_url
    );

    let start_time = std::time::Instant::now();
    match crawler.run().await {
        Ok(notices) => {
            ::log::info!(
                "Crawled {} notices in total in {:.2} seconds",
                notices.len(),
                start_time.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            ::log::error!("Crawl failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Runs the content extractor on a saved page and prints the record
fn extract_file(crawler: &NoticeCrawler, path: &std::path::Path) {
    let html = match std::fs::read_to_string(path) {
        Ok(html) => html,
        Err(e) => {
            ::log::error!("Failed to read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let record = crawler.extract_page(&html);
    match serde_json::to_string_pretty(&record) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            ::log::error!("Failed to serialize record: {}", e);
            std::process::exit(1);
        }
    }
}
