//! Listing Response Handler
//!
//! Installs fetched listings into the model. Failed fetches are logged and
//! otherwise ignored: the listing keeps whatever it showed before.

use crate::logic::errors::{classify_error, format_error_message};
use crate::model::{EntryTree, ToastLevel};
use crate::services::ListingResponse;
use crate::App;

pub fn handle_listing_response(app: &mut App, response: ListingResponse) {
    if !app.model.listing.is_current(response.generation) {
        log::debug!(
            "Dropping stale listing generation {} (current {})",
            response.generation,
            app.model.listing.generation
        );
        return;
    }

    match response.entries {
        Ok(entries) => {
            let tree = EntryTree::from_remote(&entries);
            log::info!(
                "Loaded {} top-level entries ({} total) in {:?}",
                tree.roots().len(),
                tree.len(),
                response.elapsed
            );

            let was_loaded = app.model.listing.loaded_at.is_some();
            app.model.replace_listing(tree);
            app.model.listing.loaded_at = Some(std::time::Instant::now());
            app.model.listing.last_load_time_ms = Some(response.elapsed.as_millis() as u64);

            if was_loaded {
                app.model.show_toast("Listing refreshed".to_string(), ToastLevel::Success);
            }
        }
        Err(e) => {
            log::error!(
                "Error fetching files ({}): {}",
                classify_error(&e).as_str(),
                format_error_message(&e)
            );
        }
    }
}
