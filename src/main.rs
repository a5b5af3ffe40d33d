//! `bookshelf` - In-memory book collection service
//!
//! Serves a JSON API over HTTP for creating, listing, reading, updating and
//! deleting book records. Nothing is persisted; state lives for the lifetime
//! of the process.

use bookshelf::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
