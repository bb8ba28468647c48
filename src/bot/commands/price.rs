use poise::CreateReply;

use crate::{
    bot::{
        check::not_blacklisted,
        embed::{info_embed, titled_error_embed},
        Context,
    },
    error::AppError,
    service::price::PriceService,
};

/// Get the current price of bitcoin.
#[poise::command(
    slash_command,
    prefix_command,
    category = "General",
    check = "not_blacklisted"
)]
pub async fn bitcoin(ctx: Context<'_>) -> Result<(), AppError> {
    let data = ctx.data();

    let embed = match PriceService::new(&data.http_client, &data.bitcoin_price_url)
        .bitcoin_usd_rate()
        .await
    {
        Ok(rate) => info_embed(
            "Bitcoin Price",
            format!("The current price is {} :dollar:", rate),
        ),
        Err(e) => {
            tracing::error!("Failed to fetch bitcoin price: {}", e);
            titled_error_embed(
                "Error!",
                "There's an error with the API, please try again later.",
            )
        }
    };

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}
