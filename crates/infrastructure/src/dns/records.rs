use digkit_domain::Answer;
use hickory_proto::rr::rdata::{A, AAAA, TXT};
use hickory_proto::rr::{Name, RData, Record};

/// Longest character-string a TXT record can carry.
pub const MAX_TXT_SEGMENT: usize = 255;

pub fn answer_to_record(name: &Name, answer: &Answer, ttl: u32) -> Record {
    let rdata = match answer {
        Answer::A(addr) => RData::A(A(*addr)),
        Answer::Aaaa(addr) => RData::AAAA(AAAA(*addr)),
        Answer::Txt(text) => RData::TXT(TXT::new(txt_segments(text))),
    };
    Record::from_rdata(name.clone(), ttl, rdata)
}

/// Splits text into character-strings of at most 255 bytes without cutting
/// a UTF-8 sequence in half.
pub fn txt_segments(text: &str) -> Vec<String> {
    if text.len() <= MAX_TXT_SEGMENT {
        return vec![text.to_string()];
    }

    let mut segments = Vec::with_capacity(text.len() / MAX_TXT_SEGMENT + 1);
    let mut rest = text;
    while !rest.is_empty() {
        let mut end = rest.len().min(MAX_TXT_SEGMENT);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (segment, tail) = rest.split_at(end);
        segments.push(segment.to_string());
        rest = tail;
    }
    segments
}
