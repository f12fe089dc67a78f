//! Command dispatch
//!
//! Every invocation resumes the cart from the data directory, applies one
//! action and writes the cart back, so consecutive commands behave like
//! consecutive clicks on the shop page.

use std::io::Write;

use storefront::prelude::*;
use tracing::debug;

use crate::{
    config::{CliConfig, Command},
    errors::CliError,
    navigator::PrintNavigator,
};

type Session = CartSession<FileStore>;

/// Run the configured command, writing human-readable output to `out`.
pub(crate) fn run<W: Write>(config: CliConfig, out: &mut W) -> Result<(), CliError> {
    let store_config = match &config.store {
        Some(path) => StoreConfig::from_path(path)?,
        None => StoreConfig::default(),
    };

    let catalog = FixtureCatalog::from_path(&config.catalog)?;

    if catalog.currency().iso_alpha_code != store_config.currency.iso_alpha_code {
        return Err(CliError::CurrencyMismatch {
            catalog: catalog.currency().iso_alpha_code,
            store: store_config.currency.iso_alpha_code,
        });
    }

    let store = FileStore::open(&config.data_dir)?;
    let mut session = CartSession::resume(store, store_config.cart_key.clone());

    debug!(
        data_dir = %config.data_dir.display(),
        lines = session.cart().len(),
        "resumed cart"
    );

    match config.command {
        Command::Products { category } => {
            list_products(&catalog, &store_config, category.map(Category::new), out)
        }
        Command::Categories => list_categories(&catalog, out),
        Command::Add { id } => add(&catalog, &mut session, &ProductId::new(id), out),
        Command::Update { id, quantity } => {
            update(&mut session, &ProductId::new(id), quantity, out)
        }
        Command::Remove { id } => remove(&mut session, &ProductId::new(id), out),
        Command::Cart => show_cart(session.cart(), &store_config, out),
        Command::Checkout {
            name,
            phone,
            address,
        } => checkout(
            session,
            store_config,
            CustomerDetails::new(name, phone, address),
            out,
        ),
        Command::Clear => {
            session.clear()?;
            writeln!(out, "Your cart is empty")?;

            Ok(())
        }
    }
}

fn list_products<W: Write>(
    catalog: &FixtureCatalog,
    store_config: &StoreConfig,
    category: Option<Category>,
    out: &mut W,
) -> Result<(), CliError> {
    let products = catalog.list_available_products(&CategoryFilter::from(category))?;

    if products.is_empty() {
        writeln!(out, "No products found")?;

        return Ok(());
    }

    for product in &products {
        let stock = if product.in_stock {
            ""
        } else {
            " (out of stock)"
        };

        writeln!(
            out,
            "{id:>4}  {name} [{category}] {label} {amount}{stock}",
            id = product.id,
            name = product.name,
            category = product.category,
            label = store_config.currency_label,
            amount = format_amount(product.price, store_config.currency),
        )?;
    }

    Ok(())
}

fn list_categories<W: Write>(catalog: &FixtureCatalog, out: &mut W) -> Result<(), CliError> {
    let counts = category_counts(catalog)?;

    writeln!(out, "All ({})", counts.all)?;

    for category in catalog.categories() {
        let count = counts.by_category.get(category).copied().unwrap_or_default();

        writeln!(out, "{category} ({count})")?;
    }

    Ok(())
}

fn add<W: Write>(
    catalog: &FixtureCatalog,
    session: &mut Session,
    id: &ProductId,
    out: &mut W,
) -> Result<(), CliError> {
    let product = catalog
        .find_product(id)?
        .ok_or_else(|| CliError::UnknownProduct(id.clone()))?;

    if !product.in_stock {
        return Err(CliError::OutOfStock(product.name));
    }

    session.add_item(&product);
    session.save()?;

    let quantity = session.cart().line(id).map_or(0, CartLine::quantity);

    writeln!(out, "Added {} to cart ({quantity} in cart)", product.name)?;

    Ok(())
}

fn update<W: Write>(
    session: &mut Session,
    id: &ProductId,
    quantity: i64,
    out: &mut W,
) -> Result<(), CliError> {
    if !session.update_quantity(id, quantity) {
        return Err(CliError::NotInCart(id.clone()));
    }

    session.save()?;

    if let Some(line) = session.cart().line(id) {
        writeln!(out, "{} quantity set to {}", line.name(), line.quantity())?;
    }

    Ok(())
}

fn remove<W: Write>(session: &mut Session, id: &ProductId, out: &mut W) -> Result<(), CliError> {
    let line = session
        .remove_item(id)
        .ok_or_else(|| CliError::NotInCart(id.clone()))?;

    session.save()?;

    writeln!(out, "Removed {} from cart", line.name())?;

    Ok(())
}

fn show_cart<W: Write>(cart: &Cart, store_config: &StoreConfig, out: &mut W) -> Result<(), CliError> {
    if cart.is_empty() {
        writeln!(out, "Your cart is empty")?;

        return Ok(());
    }

    let label = &store_config.currency_label;
    let currency = store_config.currency;

    for line in cart.lines() {
        writeln!(
            out,
            "{id:>4}  {name} x{quantity}  {label} {each} each  {label} {total}",
            id = line.product_id(),
            name = line.name(),
            quantity = line.quantity(),
            each = format_amount(line.price(), currency),
            total = format_amount(line.line_total(), currency),
        )?;
    }

    let totals = cart.totals();

    writeln!(out)?;
    writeln!(out, "Items: {}", cart.item_count())?;
    writeln!(out, "Subtotal: {label} {}", format_amount(totals.subtotal, currency))?;

    if totals.delivery == Price::ZERO {
        writeln!(out, "Delivery: {}", store_config.delivery_notice)?;
    } else {
        writeln!(out, "Delivery: {label} {}", format_amount(totals.delivery, currency))?;
    }

    writeln!(out, "Total: {label} {}", format_amount(totals.total, currency))?;

    Ok(())
}

/// Hand the cart to a fresh checkout session and submit it, the way the
/// checkout page picks up what the shop page left in the slot.
fn checkout<W: Write>(
    mut session: Session,
    store_config: StoreConfig,
    customer: CustomerDetails,
    out: &mut W,
) -> Result<(), CliError> {
    session.proceed_to_checkout()?;

    let key = session.key().to_string();
    let mut checkout = CartSession::resume(session.into_store(), key);

    let dispatch = {
        let channel = OrderChannel::new(store_config, PrintNavigator::new(&mut *out));

        checkout.submit_order(customer, &channel)?
    };

    writeln!(out)?;
    writeln!(out, "{}", dispatch.message)?;
    writeln!(out)?;
    writeln!(out, "Order sent. Your cart is now empty.")?;

    Ok(())
}
