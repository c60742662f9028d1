use crate::{
    constants::LOCUS_TRANSFER_PATTERN,
    error::ParserError,
    sentence::Sentence,
};

/// One sentence of a LOCUS transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoxPacket {
    /// `PMTKLOX,0,<count>`; the count is what the receiver announces, not
    /// necessarily what it sends
    Start { declared: usize },
    /// `PMTKLOX,1,<index>,<word>...`
    Data { index: usize, bytes: Vec<u8> },
    /// `PMTKLOX,2`
    End,
}

fn invalid(field: &'static str) -> ParserError {
    ParserError::InvalidField {
        message_id: LOCUS_TRANSFER_PATTERN,
        field,
    }
}

impl LoxPacket {
    pub fn parse(sentence: &Sentence) -> Result<Self, ParserError> {
        let fields = sentence.fields();
        match fields.as_slice() {
            [id, ..] if *id != LOCUS_TRANSFER_PATTERN => {
                Err(ParserError::UnknownMessage((*id).to_owned()))
            },
            [_, "0"] => Err(invalid("count")),
            [_, "0", .., declared] => Ok(LoxPacket::Start {
                declared: declared.parse().map_err(|_| invalid("count"))?,
            }),
            [_, "1", index, words @ ..] => {
                let index = index.parse().map_err(|_| invalid("index"))?;
                let mut bytes = Vec::with_capacity(words.len() * 4);
                for word in words {
                    decode_hex_into(word, &mut bytes)?;
                }
                Ok(LoxPacket::Data { index, bytes })
            },
            [_, "2", ..] => Ok(LoxPacket::End),
            [_, _, ..] => Err(invalid("type")),
            _ => Err(ParserError::InvalidFieldCount {
                message_id: LOCUS_TRANSFER_PATTERN,
                expect: "2 or more",
                got: fields.len(),
            }),
        }
    }
}

/// Appends the bytes of a hex word, two digits per byte, in written order.
fn decode_hex_into(word: &str, out: &mut Vec<u8>) -> Result<(), ParserError> {
    let digits = word.as_bytes();
    if digits.len() % 2 != 0 || !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(invalid("data"));
    }
    for pair in digits.chunks_exact(2) {
        let pair = core::str::from_utf8(pair).map_err(|_| invalid("data"))?;
        out.push(u8::from_str_radix(pair, 16).map_err(|_| invalid("data"))?);
    }
    Ok(())
}
