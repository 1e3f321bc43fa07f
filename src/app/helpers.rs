//! Async helper functions

use crate::features::fonts::JOURNAL_FACES;

/// Fetch the journal typefaces
///
/// Returns the family name and raw bytes of each face. A failure on
/// any face fails the whole fetch; the caller treats that as a
/// cosmetic miss and keeps the system fallback.
pub async fn fetch_journal_faces() -> anyhow::Result<Vec<(&'static str, Vec<u8>)>> {
    let mut faces = Vec::with_capacity(JOURNAL_FACES.len());

    for face in JOURNAL_FACES {
        tracing::debug!("fetching journal face {} from {}", face.family, face.url);
        let response = reqwest::get(face.url).await?.error_for_status()?;
        let bytes = response.bytes().await?;
        faces.push((face.family, bytes.to_vec()));
    }

    Ok(faces)
}
