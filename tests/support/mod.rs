#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// One open tab: window id, tab id, index in window, url, title.
pub type OpenTab<'a> = (u32, u32, u32, &'a str, &'a str);

/// Minimal SNSS v1 image with one selected navigation per tab.
pub fn snss_image(tabs: &[OpenTab<'_>]) -> Vec<u8> {
    let mut bytes = b"SNSS".to_vec();
    bytes.extend_from_slice(&1u32.to_le_bytes());

    for &(window_id, tab_id, index, url, title) in tabs {
        push_record(&mut bytes, 0, &words(&[window_id, tab_id]));
        push_record(&mut bytes, 2, &words(&[tab_id, index]));

        let mut navigation = words(&[tab_id, 0]);
        push_padded(&mut navigation, url.len() as u32, url.as_bytes());
        let units = title
            .encode_utf16()
            .flat_map(u16::to_le_bytes)
            .collect::<Vec<_>>();
        push_padded(&mut navigation, (units.len() / 2) as u32, &units);
        let mut payload = words(&[navigation.len() as u32]);
        payload.extend_from_slice(&navigation);
        push_record(&mut bytes, 6, &payload);

        push_record(&mut bytes, 7, &words(&[tab_id, 0]));
    }

    bytes
}

fn words(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

fn push_padded(out: &mut Vec<u8>, len: u32, data: &[u8]) {
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(data);
    while out.len() % 4 != 0 {
        out.push(0);
    }
}

fn push_record(out: &mut Vec<u8>, command_type: u8, payload: &[u8]) {
    out.extend_from_slice(&((payload.len() + 1) as u16).to_le_bytes());
    out.push(command_type);
    out.extend_from_slice(payload);
}

/// Writes `bytes` to `dir/name` and stamps it `age_secs` seconds in the past.
pub fn write_aged(dir: &Path, name: &str, bytes: &[u8], age_secs: u64) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("session file should be written");
    let modified = SystemTime::now() - Duration::from_secs(age_secs);
    File::options()
        .write(true)
        .open(&path)
        .expect("session file should reopen")
        .set_modified(modified)
        .expect("mtime should be set");
    path
}
