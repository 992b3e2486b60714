pub mod a001_affiliate;
pub mod a002_withdrawal;
pub mod a003_cancel_request;
pub mod a004_user;
pub mod a005_moderator;
pub mod a006_service;
