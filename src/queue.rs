use chrono::Local;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::models::ReminderJob;
use crate::sms::SmsClient;

#[derive(Debug, Error)]
#[error("reminder queue is not running")]
pub struct EnqueueError;

/// Enqueue handle for the reminder queue. Handlers hand a frozen
/// [`ReminderJob`] across this boundary and never talk to the SMS client
/// directly; the worker owns the job from here on. There is no way to
/// withdraw or reschedule a job once enqueued.
#[derive(Clone)]
pub struct ReminderQueue {
    tx: mpsc::UnboundedSender<ReminderJob>,
}

impl ReminderQueue {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ReminderJob>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn enqueue(&self, job: ReminderJob) -> Result<(), EnqueueError> {
        info!(to = %job.to, send_at = %job.send_at, "scheduling reminder");
        self.tx.send(job).map_err(|_| EnqueueError)
    }
}

/// Worker half of the queue: delivers each received job at its `send_at`
/// time. One delivery task per job, so a far-future job never blocks a
/// nearer one. Delivery failures are logged and dropped.
pub fn spawn_worker(
    mut rx: mpsc::UnboundedReceiver<ReminderJob>,
    client: SmsClient,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            let client = client.clone();
            tokio::spawn(dispatch(client, job));
        }
    })
}

async fn dispatch(client: SmsClient, job: ReminderJob) {
    let now = Local::now().naive_local();
    // Already-due jobs go out immediately
    let wait = (job.send_at - now).to_std().unwrap_or_default();
    if !wait.is_zero() {
        tokio::time::sleep(wait).await;
    }
    match client.send_message(&job.to, &job.message).await {
        Ok(()) => info!(to = %job.to, "reminder delivered"),
        Err(err) => error!(to = %job.to, error = %err, "failed to deliver reminder"),
    }
}
