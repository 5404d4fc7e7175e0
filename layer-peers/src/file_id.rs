//! Packed file ids.
//!
//! A file id is the url-safe base64 (unpadded) form of a small binary record,
//! with runs of zero bytes compressed as `0x00, count`:
//!
//! ```text
//! i32   type | flags
//! i32   dc_id
//! bytes file_reference     (when flags has FILE_REFERENCE)
//! i64   media_id
//! i64   access_hash
//! ...   thumbnail source   (ignored)
//! u8    minor version      (present when major >= 4)
//! u8    major version
//! ```
//!
//! Only the part that identifies the media is decoded; that is all a request
//! referencing stored media needs.

use std::fmt;

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use layer_peer_types as tl;
use layer_peer_types::{Cursor, Deserializable, Serializable, deserialize};

const MAJOR: u8 = 4;
const MINOR: u8 = 30;

const WEB_LOCATION_FLAG:   i32 = 1 << 24;
const FILE_REFERENCE_FLAG: i32 = 1 << 25;

/// Url-safe alphabet; padding is written never and accepted either way.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

// ─── FileType ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    Thumbnail          = 0,
    ChatPhoto          = 1,
    Photo              = 2,
    Voice              = 3,
    Video              = 4,
    Document           = 5,
    Encrypted          = 6,
    Temp               = 7,
    Sticker            = 8,
    Audio              = 9,
    Animation          = 10,
    EncryptedThumbnail = 11,
    Wallpaper          = 12,
    VideoNote          = 13,
    SecureRaw          = 14,
    Secure             = 15,
    Background         = 16,
    DocumentAsFile     = 17,
}

impl TryFrom<i32> for FileType {
    type Error = FileIdError;

    fn try_from(v: i32) -> Result<Self, FileIdError> {
        use FileType::*;
        Ok(match v {
            0  => Thumbnail,
            1  => ChatPhoto,
            2  => Photo,
            3  => Voice,
            4  => Video,
            5  => Document,
            6  => Encrypted,
            7  => Temp,
            8  => Sticker,
            9  => Audio,
            10 => Animation,
            11 => EncryptedThumbnail,
            12 => Wallpaper,
            13 => VideoNote,
            14 => SecureRaw,
            15 => Secure,
            16 => Background,
            17 => DocumentAsFile,
            other => return Err(FileIdError::UnknownType(other)),
        })
    }
}

// ─── FileIdError ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum FileIdError {
    /// Not valid url-safe base64.
    Base64(base64::DecodeError),
    /// The record ended early.
    Truncated,
    UnknownType(i32),
    /// Web files have no media id and cannot be referenced this way.
    WebLocation,
    /// A valid id, but for the wrong kind of media.
    WrongType { expected: FileType, found: FileType },
}

impl fmt::Display for FileIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64(e)       => write!(f, "invalid base64: {e}"),
            Self::Truncated       => write!(f, "file id is truncated"),
            Self::UnknownType(t)  => write!(f, "unknown file type {t}"),
            Self::WebLocation     => write!(f, "web file ids are not supported"),
            Self::WrongType { expected, found } => {
                write!(f, "expected a {expected:?} file id, got {found:?}")
            }
        }
    }
}

impl std::error::Error for FileIdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base64(e) => Some(e),
            _               => None,
        }
    }
}

impl From<base64::DecodeError> for FileIdError {
    fn from(e: base64::DecodeError) -> Self { Self::Base64(e) }
}

impl From<deserialize::Error> for FileIdError {
    fn from(_: deserialize::Error) -> Self { Self::Truncated }
}

// ─── FileId ───────────────────────────────────────────────────────────────────

/// The identifying part of a decoded file id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileId {
    pub file_type:      FileType,
    pub dc_id:          i32,
    pub file_reference: Vec<u8>,
    pub media_id:       i64,
    pub access_hash:    i64,
}

impl FileId {
    pub fn decode(file_id: &str) -> Result<Self, FileIdError> {
        let packed  = ENGINE.decode(file_id)?;
        let decoded = rle_decode(&packed)?;

        let (&major, rest) = decoded.split_last().ok_or(FileIdError::Truncated)?;
        let body = if major >= MAJOR {
            rest.split_last().ok_or(FileIdError::Truncated)?.1
        } else {
            rest
        };

        let mut cur   = Cursor::from_slice(body);
        let raw_type  = i32::deserialize(&mut cur)?;
        let dc_id     = i32::deserialize(&mut cur)?;
        if raw_type & WEB_LOCATION_FLAG != 0 {
            return Err(FileIdError::WebLocation);
        }
        let file_type = FileType::try_from(raw_type & !(WEB_LOCATION_FLAG | FILE_REFERENCE_FLAG))?;

        let file_reference = if raw_type & FILE_REFERENCE_FLAG != 0 {
            Vec::<u8>::deserialize(&mut cur)?
        } else {
            Vec::new()
        };
        let media_id    = i64::deserialize(&mut cur)?;
        let access_hash = i64::deserialize(&mut cur)?;

        Ok(Self { file_type, dc_id, file_reference, media_id, access_hash })
    }

    /// Pack into the current (4.30) layout. A file reference is always
    /// written, even an empty one.
    pub fn encode(&self) -> String {
        let mut buf = Vec::new();
        (self.file_type as i32 | FILE_REFERENCE_FLAG).serialize(&mut buf);
        self.dc_id.serialize(&mut buf);
        self.file_reference.serialize(&mut buf);
        self.media_id.serialize(&mut buf);
        self.access_hash.serialize(&mut buf);
        buf.push(MINOR);
        buf.push(MAJOR);

        ENGINE.encode(rle_encode(&buf))
    }

    /// The `InputPhoto` for a photo file id.
    pub fn to_input_photo(&self) -> Result<tl::enums::InputPhoto, FileIdError> {
        if self.file_type != FileType::Photo {
            return Err(FileIdError::WrongType { expected: FileType::Photo, found: self.file_type });
        }
        Ok(tl::enums::InputPhoto::InputPhoto(tl::types::InputPhoto {
            id:             self.media_id,
            access_hash:    self.access_hash,
            file_reference: self.file_reference.clone(),
        }))
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

// ─── Zero run-length ──────────────────────────────────────────────────────────

fn rle_encode(data: &[u8]) -> Vec<u8> {
    let mut out   = Vec::with_capacity(data.len());
    let mut zeros = 0u8;
    for &b in data {
        if b == 0 {
            zeros += 1;
            if zeros == u8::MAX {
                out.extend([0, zeros]);
                zeros = 0;
            }
            continue;
        }
        if zeros > 0 {
            out.extend([0, zeros]);
            zeros = 0;
        }
        out.push(b);
    }
    if zeros > 0 {
        out.extend([0, zeros]);
    }
    out
}

fn rle_decode(data: &[u8]) -> Result<Vec<u8>, FileIdError> {
    let mut out  = Vec::with_capacity(data.len() * 2);
    let mut iter = data.iter();
    while let Some(&b) = iter.next() {
        if b == 0 {
            let &n = iter.next().ok_or(FileIdError::Truncated)?;
            out.extend(std::iter::repeat_n(0u8, n as usize));
        } else {
            out.push(b);
        }
    }
    Ok(out)
}
