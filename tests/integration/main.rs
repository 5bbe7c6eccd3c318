mod evaluate;
mod plan_loading;
mod progress;
mod watch_fingerprint;
