use super::{AdsApi, Notifier, AD_CREATED_MESSAGE, AD_FAILED_MESSAGE};
use crate::model::{AdDraft, FormFields, WeekDaySelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Name was empty, nothing was sent.
    Skipped,
    Created,
    Failed,
}

/// Publishes the ad described by the submitted form and tells the user how it went.
///
/// Submitting without a name returns [`SubmitOutcome::Skipped`] without touching
/// the network or the notifier. Request errors never escape; they are logged and
/// reported through the notifier as a generic failure.
pub async fn submit_ad<A, N>(
    api: &A,
    notifier: &N,
    fields: &FormFields,
    week_days: &WeekDaySelection,
    use_voice_channel: bool,
) -> SubmitOutcome
where
    A: AdsApi + ?Sized,
    N: Notifier + ?Sized,
{
    let draft = match AdDraft::from_form(fields, week_days, use_voice_channel) {
        Ok(draft) => draft,
        Err(err) => {
            log::debug!("Ad not submitted: {}", err);
            return SubmitOutcome::Skipped;
        }
    };

    log::info!("Publishing ad for game '{}'", draft.game_id);

    match api.create_ad(&draft.game_id, &draft.ad).await {
        Ok(()) => {
            notifier.notify(AD_CREATED_MESSAGE);
            SubmitOutcome::Created
        }
        Err(err) => {
            log::error!("Failed to create ad: {}", err);
            notifier.notify(AD_FAILED_MESSAGE);
            SubmitOutcome::Failed
        }
    }
}
