//! Media upload and chat photo updates.
//!
//! ## Upload
//! [`MediaUploader`] turns a [`MediaSource`] into an [`UploadedFile`]. The
//! [`Client`] implementation reads the file, then sends it in parts with
//! `upload.saveFilePart` (or `upload.saveBigFilePart` for big files).
//!
//! ## Chat photo
//! [`Client::set_chat_photo`] sets the photo of a basic group or channel,
//! either from new content or from a photo already on Telegram's servers.

use std::future::Future;
use std::path::{Path, PathBuf};

use layer_peer_types as tl;

use crate::file_id::FileId;
use crate::resolve::{PeerIdentifier, PeerResolver};
use crate::transport::Transport;
use crate::{Client, InvocationError, PeerReference};

// ─── MediaSource ──────────────────────────────────────────────────────────────

/// Where the content of a photo or video comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// A file on the local filesystem.
    File(PathBuf),
    /// Content already in memory, with the file name to upload it under.
    Memory { name: String, data: Vec<u8> },
    /// A packed file id of media already stored by Telegram.
    FileId(String),
}

impl MediaSource {
    pub fn memory(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Memory { name: name.into(), data: data.into() }
    }

    /// Whether this names media already stored by Telegram.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::FileId(_))
    }
}

/// A string naming an existing regular file is a path; anything else is a
/// file id.
impl From<&str> for MediaSource {
    fn from(s: &str) -> Self {
        if Path::new(s).is_file() {
            Self::File(PathBuf::from(s))
        } else {
            Self::FileId(s.to_string())
        }
    }
}

impl From<PathBuf> for MediaSource {
    fn from(p: PathBuf) -> Self { Self::File(p) }
}

impl From<&Path> for MediaSource {
    fn from(p: &Path) -> Self { Self::File(p.to_path_buf()) }
}

// ─── UploadedFile ─────────────────────────────────────────────────────────────

/// A successfully uploaded file, ready to be referenced in a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub(crate) inner:     tl::enums::InputFile,
    pub(crate) mime_type: String,
    pub(crate) name:      String,
}

impl UploadedFile {
    pub fn new(inner: tl::enums::InputFile, name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self { inner, name: name.into(), mime_type: mime_type.into() }
    }

    /// The file's MIME type (guessed from its name on upload).
    pub fn mime_type(&self) -> &str { &self.mime_type }
    /// The file's original name.
    pub fn name(&self) -> &str { &self.name }

    pub fn input_file(&self) -> &tl::enums::InputFile { &self.inner }

    pub fn into_input_file(self) -> tl::enums::InputFile { self.inner }
}

// ─── MediaUploader ────────────────────────────────────────────────────────────

/// Uploads local content to Telegram.
pub trait MediaUploader: Send + Sync {
    fn upload(
        &self,
        media: &MediaSource,
    ) -> impl Future<Output = Result<UploadedFile, InvocationError>> + Send;
}

impl<T: Transport> MediaUploader for Client<T> {
    async fn upload(&self, media: &MediaSource) -> Result<UploadedFile, InvocationError> {
        match media {
            MediaSource::File(path) => {
                let data = tokio::fs::read(path).await.map_err(|e| {
                    InvocationError::Upload(format!("{}: {e}", path.display()))
                })?;
                let name = path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "file".to_string());
                self.upload_bytes(&data, &name).await
            }
            MediaSource::Memory { name, data } => self.upload_bytes(data, name).await,
            MediaSource::FileId(_) => Err(InvocationError::Upload(
                "a file id refers to stored media and cannot be uploaded".into(),
            )),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Upload bytes as a file under `name`.
    pub async fn upload_bytes(&self, data: &[u8], name: &str) -> Result<UploadedFile, InvocationError> {
        let part_size = self.inner.config.upload_part_size;
        if part_size == 0 {
            return Err(InvocationError::Upload("upload part size is zero".into()));
        }
        if data.is_empty() {
            return Err(InvocationError::Upload(format!("{name}: file is empty")));
        }

        let file_id = crate::random_i64()
            .map_err(|e| InvocationError::Upload(format!("no randomness for file id: {e}")))?;
        let total       = data.len();
        let big         = total >= self.inner.config.big_file_threshold;
        let total_parts = total.div_ceil(part_size) as i32;

        for (part_num, chunk) in data.chunks(part_size).enumerate() {
            if big {
                let req = tl::functions::upload::SaveBigFilePart {
                    file_id,
                    file_part:        part_num as i32,
                    file_total_parts: total_parts,
                    bytes:            chunk.to_vec(),
                };
                self.invoke(&req).await?;
            } else {
                let req = tl::functions::upload::SaveFilePart {
                    file_id,
                    file_part: part_num as i32,
                    bytes:     chunk.to_vec(),
                };
                self.invoke(&req).await?;
            }
            log::debug!("[layer] Uploaded part {} / {}", part_num + 1, total_parts);
        }

        let inner = if big {
            tl::enums::InputFile::Big(tl::types::InputFileBig {
                id:    file_id,
                parts: total_parts,
                name:  name.to_string(),
            })
        } else {
            // Telegram accepts an empty checksum.
            tl::enums::InputFile::InputFile(tl::types::InputFile {
                id:           file_id,
                parts:        total_parts,
                name:         name.to_string(),
                md5_checksum: String::new(),
            })
        };

        let mime_type = mime_guess::from_path(name).first_or_octet_stream();
        log::info!("[layer] File '{name}' uploaded ({total} bytes, {total_parts} parts)");
        Ok(UploadedFile::new(inner, name, mime_type.essence_str()))
    }

    /// Set the photo of a basic group, supergroup or channel.
    ///
    /// `photo` may be new content (a path or in-memory bytes), which is
    /// uploaded together with the optional animated `video`; or the file id
    /// of a photo Telegram already stores, in which case `video` is ignored.
    /// Passing `None` for `photo` uploads only the video.
    ///
    /// Returns `true` once the edit was accepted.
    pub async fn set_chat_photo(
        &self,
        chat:  impl Into<PeerIdentifier>,
        photo: Option<MediaSource>,
        video: Option<MediaSource>,
    ) -> Result<bool, InvocationError> {
        self.set_chat_photo_with(self, chat, photo, video).await
    }

    /// [`Client::set_chat_photo`] with a custom uploader.
    pub async fn set_chat_photo_with<U: MediaUploader>(
        &self,
        uploader: &U,
        chat:     impl Into<PeerIdentifier>,
        photo:    Option<MediaSource>,
        video:    Option<MediaSource>,
    ) -> Result<bool, InvocationError> {
        let chat = self.resolve_peer(chat.into()).await?;
        let target = match (chat, chat.to_input_channel()) {
            (PeerReference::Chat { id }, _) => PhotoTarget::Chat(id as i64),
            (_, Some(channel)) => PhotoTarget::Channel(channel),
            (other, None) => return Err(InvocationError::InvalidArgument(format!(
                "set_chat_photo: {other} is not a group or channel"
            ))),
        };

        let photo = chat_photo_input(uploader, photo, video).await?;
        let updates = match target {
            PhotoTarget::Chat(chat_id) => {
                self.invoke(&tl::functions::messages::EditChatPhoto { chat_id, photo }).await?
            }
            PhotoTarget::Channel(channel) => {
                self.invoke(&tl::functions::channels::EditPhoto { channel, photo }).await?
            }
        };
        self.apply_updates(updates).await;

        log::info!("[layer] Photo of {chat} updated");
        Ok(true)
    }

    async fn apply_updates(&self, updates: tl::enums::Updates) {
        if let tl::enums::Updates::Updates(u) = updates {
            self.cache_entities(&u.users, &u.chats).await;
        }
    }
}

enum PhotoTarget {
    Chat(i64),
    Channel(tl::enums::InputChannel),
}

async fn chat_photo_input<U: MediaUploader>(
    uploader: &U,
    photo:    Option<MediaSource>,
    video:    Option<MediaSource>,
) -> Result<tl::enums::InputChatPhoto, InvocationError> {
    if let Some(MediaSource::FileId(file_id)) = &photo {
        let photo = FileId::decode(file_id)
            .and_then(|id| id.to_input_photo())
            .map_err(|e| InvocationError::InvalidArgument(format!("photo file id: {e}")))?;
        return Ok(tl::enums::InputChatPhoto::InputChatPhoto(tl::types::InputChatPhoto { id: photo }));
    }

    let file = match &photo {
        Some(p) => Some(uploader.upload(p).await?.into_input_file()),
        None    => None,
    };
    let video = match &video {
        Some(v) => Some(uploader.upload(v).await?.into_input_file()),
        None    => None,
    };
    Ok(tl::enums::InputChatPhoto::UploadedPhoto(tl::types::InputChatUploadedPhoto {
        file,
        video,
        video_start_ts: None,
    }))
}
