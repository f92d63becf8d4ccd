//! `sxd checksums` – print attribution string digests.

use sxd_core::checksum::ChecksumReport;
use sxd_core::config::ChecksumConfig;

pub fn run_checksums(cfg: &ChecksumConfig) {
    let report = ChecksumReport::build(&cfg.entries, &cfg.master_key);
    print!("{report}");
}
