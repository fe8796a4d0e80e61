/// True when no transcript carries any text, including when there are none.
pub fn all_transcripts_empty(transcripts: &[String]) -> bool {
    transcripts.iter().all(|text| text.is_empty())
}
