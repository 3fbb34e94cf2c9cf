//! Command-line surface.
//!
//! Every command except `login` and `logout` needs a stored session and
//! fails before sending anything when there is none.

use crate::clients::image_client::check_image_file;
use crate::config::AdminConfig;
use crate::error::ImageError;
use crate::lifecycle::AdminSystem;
use crate::model::{Credentials, OrderId, OrderStatus, ProductDraft, ProductId};
use crate::order_board::{BoardError, TransitionOutcome};
use crate::render::{build_view, render_products, render_text};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Instrument};

#[derive(Debug, Parser)]
#[command(name = "shop-admin")]
#[command(about = "Admin console for the shop backend")]
#[command(
    after_help = "Environment:\n  SHOP_ADMIN_BASE_URL      Backend base URL\n  SHOP_ADMIN_TOKEN_FILE    Session token file\n  SHOP_ADMIN_TIMEOUT_SECS  Request timeout (unset: none)\n  SHOP_ADMIN_CLOUDINARY_CLOUD_NAME     Image host account (--image)\n  SHOP_ADMIN_CLOUDINARY_UPLOAD_PRESET  Unsigned upload preset (--image)\n  RUST_LOG                 Log filter"
)]
pub struct Cli {
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    #[arg(long, global = true)]
    pub token_file: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session token.
    Logout,
    /// Show every order grouped by status.
    Orders,
    /// Move an order to another status and show the refreshed board.
    SetStatus {
        id: u64,
        /// PENDING, DELIVERING, DONE or CANCELLED.
        status: String,
    },
    Products {
        #[command(subcommand)]
        command: ProductCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    List,
    Show { id: u64 },
    Create(DraftArgs),
    Update {
        id: u64,
        #[command(flatten)]
        draft: DraftArgs,
    },
    Delete { id: u64 },
}

/// Product form fields. On update, omitted fields keep their current value.
#[derive(Debug, Clone, Default, Args)]
pub struct DraftArgs {
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub original_price: Option<f64>,
    #[arg(long)]
    pub sale_price: Option<f64>,
    #[arg(long, conflicts_with = "image")]
    pub image_url: Option<String>,
    /// Local image to upload to the asset host (500KB max).
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl DraftArgs {
    /// Overlays the given fields on `base`.
    pub fn apply(self, mut base: ProductDraft) -> ProductDraft {
        if let Some(code) = self.code {
            base.code = code;
        }
        if let Some(name) = self.name {
            base.name = name;
        }
        if let Some(description) = self.description {
            base.description = description;
        }
        if let Some(price) = self.original_price {
            base.original_price = price;
        }
        if let Some(price) = self.sale_price {
            base.sale_price = price;
        }
        if self.image_url.is_some() {
            base.image_url = self.image_url;
        }
        base
    }

    /// Uploads `--image` if given and replaces it with the hosted URL.
    ///
    /// The size limit is enforced before the upload client is even required.
    pub async fn resolve_image(mut self, system: &AdminSystem) -> Result<Self, ImageError> {
        if let Some(path) = self.image.take() {
            check_image_file(&path).await?;
            let images = system.images.as_ref().ok_or(ImageError::NotConfigured)?;
            self.image_url = Some(images.upload(&path).await?);
        }
        Ok(self)
    }

    pub fn into_draft(self) -> ProductDraft {
        self.apply(ProductDraft {
            code: String::new(),
            name: String::new(),
            description: String::new(),
            original_price: 0.0,
            sale_price: 0.0,
            image_url: None,
        })
    }
}

/// Runs a parsed command line and prints its output to stdout.
pub async fn run(cli: Cli) -> Result<(), String> {
    let config = AdminConfig::from_env().with_overrides(cli.base_url, cli.token_file);
    let mut system = AdminSystem::new(&config)?;

    let span = tracing::info_span!("command");
    let result = execute(&mut system, cli.command).instrument(span).await;
    system.shutdown().await?;

    let output = result?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Runs one command against `system` and returns what should be printed.
pub async fn execute(system: &mut AdminSystem, command: Command) -> Result<String, String> {
    match command {
        Command::Login { email, password } => {
            system
                .session
                .login(Credentials::new(email, password))
                .await
                .map_err(|e| e.to_string())?;
            Ok(format!(
                "Logged in. Token saved to {}.",
                system.session.tokens().path().display()
            ))
        }
        Command::Logout => {
            system.session.logout().map_err(|e| e.to_string())?;
            Ok(format!(
                "Logged out. Removed {}.",
                system.session.tokens().path().display()
            ))
        }
        Command::Orders => {
            system.require_session().map_err(|e| e.to_string())?;
            let board = system.open_order_board();
            let snapshot = board.wait_until_loaded().await.map_err(|e| e.to_string())?;
            Ok(render_text(&build_view(&snapshot)))
        }
        Command::SetStatus { id, status } => {
            system.require_session().map_err(|e| e.to_string())?;
            let status: OrderStatus = status
                .parse()
                .map_err(|e| BoardError::from(e).to_string())?;
            let id = OrderId(id);

            let board = system.open_order_board();
            board.wait_until_loaded().await.map_err(|e| e.to_string())?;
            let outcome = board
                .transition(id, status)
                .await
                .map_err(|e| e.to_string())?;
            let view = render_text(&build_view(&board.snapshot()));
            match outcome {
                TransitionOutcome::Applied => {
                    info!(%id, %status, "Transition applied");
                    Ok(view)
                }
                TransitionOutcome::Failed(error) => {
                    Ok(format!("Status update for order {id} failed: {error}\n\n{view}"))
                }
            }
        }
        Command::Products { command } => {
            system.require_session().map_err(|e| e.to_string())?;
            products(system, command).await
        }
    }
}

async fn products(system: &AdminSystem, command: ProductCommand) -> Result<String, String> {
    let products = &system.products;
    match command {
        ProductCommand::List => {
            let list = products.list_products().await.map_err(|e| e.to_string())?;
            Ok(render_products(&list))
        }
        ProductCommand::Show { id } => {
            let product = products
                .get_product(ProductId(id))
                .await
                .map_err(|e| e.to_string())?;
            Ok(render_products(std::slice::from_ref(&product)))
        }
        ProductCommand::Create(args) => {
            let args = args.resolve_image(system).await.map_err(|e| e.to_string())?;
            let created = products
                .create_product(args.into_draft())
                .await
                .map_err(|e| e.to_string())?;
            Ok(match created {
                Some(product) => format!("Created product {}.", product.id),
                None => "Product created.".to_string(),
            })
        }
        ProductCommand::Update { id, draft } => {
            let id = ProductId(id);
            let draft = draft.resolve_image(system).await.map_err(|e| e.to_string())?;
            let current = products.get_product(id).await.map_err(|e| e.to_string())?;
            let draft = draft.apply(ProductDraft::from(&current));
            products
                .update_product(id, draft)
                .await
                .map_err(|e| e.to_string())?;
            Ok(format!("Updated product {id}."))
        }
        ProductCommand::Delete { id } => {
            let remaining = products
                .delete_product(ProductId(id))
                .await
                .map_err(|e| e.to_string())?;
            Ok(format!("Deleted product {id}.\n\n{}", render_products(&remaining)))
        }
    }
}
