//! Test helpers for temporary auction files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use wdp_core::test_support::conflicting_bids;
use wdp_core::{Auction, Item};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory exposed as a UTF-8 path.
pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Two items priced `[10, 20]` with one bid on both items at 25 and one
/// on item 0 at 10. The optimum is bid 0 alone at 25.
pub(super) fn conflicting_auction() -> Auction {
    let items = vec![Item::new(0, 10), Item::new(1, 20)];
    Auction::new(items, conflicting_bids()).expect("valid auction")
}

pub(super) fn write_auction(path: &Utf8Path, auction: &Auction) {
    let payload = serde_json::to_string_pretty(auction).expect("serialise auction");
    write_utf8(path, payload.as_bytes());
}
