use particles_core::audio::FFT_SIZE;
use particles_core::AudioLevels;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Microphone analysis chain: stream source → analyser (never routed to the speakers).
pub struct LiveInput {
    audio_ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    _source: web::MediaStreamAudioSourceNode,
    spectrum: Vec<u8>,
}

impl LiveInput {
    /// Sample the analyser and reduce it to band levels.
    pub fn levels(&mut self) -> AudioLevels {
        self.analyser.get_byte_frequency_data(&mut self.spectrum);
        AudioLevels::from_byte_spectrum(&self.spectrum)
    }

    pub fn resume(&self) {
        if self.audio_ctx.state() == web::AudioContextState::Suspended {
            _ = self.audio_ctx.resume();
            log::info!("[audio] resuming context after user gesture");
        }
    }
}

/// Acquisition state, polled by the frame loop without blocking.
pub enum MicInput {
    Pending,
    Live(LiveInput),
    Unavailable,
}

impl MicInput {
    pub fn levels(&mut self) -> Option<AudioLevels> {
        match self {
            MicInput::Live(input) => Some(input.levels()),
            MicInput::Pending | MicInput::Unavailable => None,
        }
    }

    #[inline]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, MicInput::Unavailable)
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

async fn open_microphone() -> anyhow::Result<LiveInput> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window.navigator().media_devices().map_err(js_err)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    constraints.set_video(&JsValue::FALSE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(js_err)?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    let audio_ctx = web::AudioContext::new().map_err(js_err)?;
    let analyser = web::AnalyserNode::new(&audio_ctx).map_err(js_err)?;
    analyser.set_fft_size(FFT_SIZE);
    let source = audio_ctx
        .create_media_stream_source(&stream)
        .map_err(js_err)?;
    source.connect_with_audio_node(&analyser).map_err(js_err)?;

    let spectrum = vec![0u8; analyser.frequency_bin_count() as usize];
    Ok(LiveInput {
        audio_ctx,
        analyser,
        _source: source,
        spectrum,
    })
}

/// Request microphone access in the background; `mic` moves out of `Pending` when done.
pub fn request_microphone(mic: Rc<RefCell<MicInput>>) {
    spawn_local(async move {
        let next = match open_microphone().await {
            Ok(input) => {
                log::info!("[audio] microphone connected");
                MicInput::Live(input)
            }
            Err(e) => {
                log::warn!("[audio] microphone unavailable: {:?}", e);
                MicInput::Unavailable
            }
        };
        *mic.borrow_mut() = next;
    });
}
