use anyhow::Result;
use clap::Parser;
use client_core::{load_settings, MenuClient, Phase};
use shared::domain::{resolve_image_url, MenuId};

#[derive(Parser, Debug)]
struct Args {
    /// Base origin of the menu API, e.g. https://vkus-sovet.ru
    #[arg(long)]
    base_url: Option<String>,
    /// Category key to fetch dishes for after the categories load.
    #[arg(long)]
    menu_id: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    let base_url = settings.base_url.clone();

    let client = MenuClient::new(settings);
    client.fetch_categories().await?;

    let state = client.snapshot();
    if let Phase::Error(error) = state.phase() {
        println!("error: {error}");
        return Ok(());
    }

    println!("{} categories:", state.categories.len());
    for category in &state.categories {
        println!(
            "  [{}] {} ({} submenus) {}",
            category.menu_id,
            category.name,
            category.sub_menu_count,
            resolve_image_url(&base_url, &category.image_url),
        );
    }

    if let Some(menu_id) = args.menu_id {
        client.fetch_dishes(MenuId(menu_id)).await?;

        let state = client.snapshot();
        if let Phase::Error(error) = state.phase() {
            println!("error: {error}");
            return Ok(());
        }

        println!("{} dishes:", state.dishes.len());
        for dish in &state.dishes {
            let marker = if dish.is_spicy() { " [spicy]" } else { "" };
            println!(
                "  {}: {} / {}{marker}\n    {}",
                dish.name, dish.price, dish.weight, dish.description
            );
        }
    }

    Ok(())
}
