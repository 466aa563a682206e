use mealweek_client::api_backend::ApiClient;
use mealweek_client::cart_store::CartStore;
use mealweek_client::catalog_filter::{filter_products, ProductFilter};
use mealweek_client::constants::DEFAULT_API_URL;
use mealweek_client::data_types::menu_types::WeeklyMenu;
use mealweek_client::remote_cache::RemoteCache;
use mealweek_client::session_store::SessionStore;
use mealweek_client::shared_main::logger_init;

use clap::Parser;

/// Terminal client for the mealweek platform: log in, browse the
/// catalog and the published weekly menus.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the backend API
    #[arg(short, long, env = "API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Account e-mail
    #[arg(short, long, env = "MEALWEEK_EMAIL")]
    email: String,
    /// Account password
    #[arg(short, long, env = "MEALWEEK_PASSWORD")]
    password: String,
    /// Filter products by name
    #[arg(short, long, default_value = "")]
    search: String,
    /// Enable verbose logging (mostly request timings){n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger_init("mealweek_client", args.verbose);

    let api = ApiClient::new(&args.api_url);
    let mut session = SessionStore::new();
    let mut cart = CartStore::new();

    let login = api.login(&args.email, &args.password).await?;
    session.login(login.user, login.token, login.favorites);

    let products = api.get_products().await?;
    log::info!("{} products in the catalog", products.len());

    let filter = ProductFilter {
        search: args.search,
        ..ProductFilter::default()
    };
    let visible = filter_products(&products, &filter);
    for product in &visible {
        let marker = if session.is_favorite(product.id) {
            "★"
        } else {
            " "
        };
        println!("{} {:<40} {:>8.2}", marker, product.name, product.price);
    }

    if let Some(first) = visible.first() {
        cart.add((*first).clone());
        log::info!("added '{}' to the cart", first.name);
    }

    let mut menus: RemoteCache<WeeklyMenu> = RemoteCache::new();
    let token = menus.begin_load();
    match api.get_weekly_menus().await {
        Ok(items) => menus.resolve(token, items),
        Err(e) => menus.fail(token, e.to_string()),
    }

    if let Some(error) = menus.error() {
        log::warn!("weekly menus unavailable: {}", error);
    }
    for menu in menus.items().iter().filter(|m| m.published) {
        println!(
            "menu '{}' (week of {}): {} meals",
            menu.name,
            menu.week_start,
            menu.meals.len()
        );
    }

    log::info!(
        "cart: {} items, coins: {}",
        cart.len(),
        session.coin_balance()
    );

    api.logout().await.ok();
    Ok(())
}
