mod dispatch;
mod fixtures;
mod helpers;
