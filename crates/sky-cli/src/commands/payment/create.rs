use sky_core::enums::PaymentMethod;
use sky_core::records::PaymentRequest;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PaymentPayArgs;
use crate::commands::shared::parse::parse_tag;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    args: &PaymentPayArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let method: PaymentMethod = parse_tag(&args.method, "method")?;
    let currency = args
        .currency
        .clone()
        .unwrap_or_else(|| ctx.config.general.default_currency.clone());

    let payment = PaymentRequest {
        booking_id: args.booking_id,
        amount: args.amount,
        payment_method: method,
        currency: Some(currency),
        card_number: args.card_number.clone(),
        cvv: args.cvv.clone(),
        expiry_month: args.expiry_month.clone(),
        expiry_year: args.expiry_year.clone(),
        upi_id: args.upi_id.clone(),
        wallet_provider: args.wallet_provider.clone(),
    };

    let receipt = ctx.client.create_payment(&payment).await?;
    output(&receipt, flags.format)
}
