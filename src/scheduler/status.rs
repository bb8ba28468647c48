use rand::seq::IndexedRandom;
use serenity::all::{ActivityData, Context};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::error::AppError;

/// Presence texts the bot rotates through.
pub const STATUSES: [&str; 3] = ["chillin", "camping", "grinding"];

/// Starts the presence rotation scheduler
///
/// Sets a random status right away, then picks a new one at the start of every minute.
///
/// # Arguments
/// - `ctx`: Gateway context used to update the presence
pub async fn start_scheduler(ctx: Context) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    set_random_status(&ctx);

    let job_ctx = ctx.clone();
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let ctx = job_ctx.clone();

        Box::pin(async move {
            set_random_status(&ctx);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Status rotation scheduler started");

    Ok(())
}

fn set_random_status(ctx: &Context) {
    let status = random_status();
    tracing::debug!("Setting status to {}", status);

    ctx.set_activity(Some(ActivityData::playing(status)));
}

/// Picks one of `STATUSES` at random.
pub fn random_status() -> &'static str {
    STATUSES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(STATUSES[0])
}
