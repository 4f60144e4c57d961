//! # GSOM Assistant Bot
//!
//! A Telegram bot serving the static informational menu of the GSOM SPbU
//! business school: timetable, student clubs, contacts, laundry schedules
//! and other campus links, navigated through inline buttons on a single
//! "active card" message per chat.

pub mod bot;
pub mod config;
pub mod renderer;
pub mod screens;
pub mod session;
pub mod stylize;
pub mod telegram;
