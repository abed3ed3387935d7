/// Sound engine: procedural beeps via rodio.
///
/// All effects are synthesized into in-memory WAV buffers at init time and
/// played fire-and-forget through a detached `Sink`.
///
/// Build without the "sound" feature to drop audio entirely; the stub
/// `SoundEngine` below does nothing.

#[cfg(feature = "sound")]
mod inner {
    use std::io::Cursor;
    use std::sync::Arc;

    use rodio::{OutputStream, OutputStreamHandle, Sink};

    const SAMPLE_RATE: u32 = 22050;
    const TAU: f32 = std::f32::consts::PI * 2.0;

    pub struct SoundEngine {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        sfx_high: Arc<Vec<u8>>,
        sfx_low: Arc<Vec<u8>>,
        sfx_win: Arc<Vec<u8>>,
        sfx_lose: Arc<Vec<u8>>,
    }

    impl SoundEngine {
        /// `None` when no output device is available.
        pub fn new() -> Option<Self> {
            let (stream, handle) = match OutputStream::try_default() {
                Ok(pair) => pair,
                Err(e) => {
                    tracing::debug!("no audio output: {e}");
                    return None;
                }
            };

            Some(SoundEngine {
                _stream: stream,
                handle,
                sfx_high: Arc::new(make_wav(&gen_sweep(700.0, 350.0))),
                sfx_low: Arc::new(make_wav(&gen_sweep(350.0, 700.0))),
                sfx_win: Arc::new(make_wav(&gen_win())),
                sfx_lose: Arc::new(make_wav(&gen_lose())),
            })
        }

        fn play_bytes(&self, bytes: Vec<u8>) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                if let Ok(src) = rodio::Decoder::new(Cursor::new(bytes)) {
                    sink.append(src);
                    sink.detach();
                }
            }
        }

        fn play(&self, buf: &Arc<Vec<u8>>) {
            self.play_bytes(buf.as_ref().clone());
        }

        /// Marquee tick; pitch rises as the banner scrolls down.
        pub fn play_intro_blip(&self, frame: u16, total: u16) {
            let ratio = frame as f32 / total.max(1) as f32;
            let freq = 300.0 + ratio * 600.0;
            self.play_bytes(make_wav(&gen_blip(freq, 0.05, 0.25)));
        }

        pub fn play_too_high(&self) { self.play(&self.sfx_high); }
        pub fn play_too_low(&self) { self.play(&self.sfx_low); }
        pub fn play_win(&self) { self.play(&self.sfx_win); }
        pub fn play_lose(&self) { self.play(&self.sfx_lose); }
    }

    // ════════════════════════════════════════════════════════════
    //  Waveform generators: mono f32 samples
    // ════════════════════════════════════════════════════════════

    fn gen_blip(freq: f32, duration: f32, volume: f32) -> Vec<f32> {
        let n = (SAMPLE_RATE as f32 * duration) as usize;
        (0..n)
            .map(|i| {
                let t = i as f32 / SAMPLE_RATE as f32;
                let env = 1.0 - (i as f32 / n as f32);
                (t * freq * TAU).sin() * env * volume
            })
            .collect()
    }

    /// Short glide from `from` Hz to `to` Hz. Falling = too high, rising = too low.
    fn gen_sweep(from: f32, to: f32) -> Vec<f32> {
        let n = (SAMPLE_RATE as f32 * 0.15) as usize;
        let mut phase = 0.0_f32;
        (0..n)
            .map(|i| {
                let t = i as f32 / n as f32;
                let freq = from + (to - from) * t;
                phase += freq / SAMPLE_RATE as f32;
                let env = (1.0 - t).powf(0.6);
                (phase * TAU).sin() * env * 0.25
            })
            .collect()
    }

    fn gen_notes(notes: &[f32], note_dur: f32, volume: f32) -> Vec<f32> {
        let mut samples = Vec::new();
        for &freq in notes {
            let n = (SAMPLE_RATE as f32 * note_dur) as usize;
            for i in 0..n {
                let t = i as f32 / SAMPLE_RATE as f32;
                let env = 1.0 - (i as f32 / n as f32) * 0.3;
                let wave = (t * freq * TAU).sin() * 0.7 + (t * freq * 2.0 * TAU).sin() * 0.3;
                samples.push(wave * env * volume);
            }
        }
        samples
    }

    /// Jackpot: C5→E5→G5→C6
    fn gen_win() -> Vec<f32> {
        gen_notes(&[523.0, 659.0, 784.0, 1047.0], 0.1, 0.3)
    }

    /// Out of guesses: A4→F#4→Eb4→C4 with a fade on the tail
    fn gen_lose() -> Vec<f32> {
        let mut samples = gen_notes(&[440.0, 370.0, 311.0, 261.0], 0.12, 0.3);
        let total = samples.len();
        let fade_len = total / 4;
        for (i, s) in samples.iter_mut().enumerate().skip(total - fade_len) {
            *s *= (total - i) as f32 / fade_len as f32;
        }
        samples
    }

    // ════════════════════════════════════════════════════════════
    //  WAV encoder: 16-bit mono PCM
    // ════════════════════════════════════════════════════════════

    fn make_wav(samples: &[f32]) -> Vec<u8> {
        let num_channels: u16 = 1;
        let bits_per_sample: u16 = 16;
        let byte_rate = SAMPLE_RATE * (num_channels as u32) * (bits_per_sample as u32) / 8;
        let block_align = num_channels * bits_per_sample / 8;
        let data_size = samples.len() as u32 * 2;
        let file_size = 36 + data_size;

        let mut buf = Vec::with_capacity(44 + data_size as usize);

        buf.extend_from_slice(b"RIFF");
        buf.extend_from_slice(&file_size.to_le_bytes());
        buf.extend_from_slice(b"WAVE");

        buf.extend_from_slice(b"fmt ");
        buf.extend_from_slice(&16u32.to_le_bytes());
        buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
        buf.extend_from_slice(&num_channels.to_le_bytes());
        buf.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
        buf.extend_from_slice(&byte_rate.to_le_bytes());
        buf.extend_from_slice(&block_align.to_le_bytes());
        buf.extend_from_slice(&bits_per_sample.to_le_bytes());

        buf.extend_from_slice(b"data");
        buf.extend_from_slice(&data_size.to_le_bytes());

        for &s in samples {
            let val = (s.clamp(-1.0, 1.0) * 32767.0) as i16;
            buf.extend_from_slice(&val.to_le_bytes());
        }

        buf
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn wav_header_and_length() {
            let wav = make_wav(&gen_win());
            assert_eq!(&wav[0..4], b"RIFF");
            assert_eq!(&wav[8..12], b"WAVE");
            let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]) as usize;
            assert_eq!(wav.len(), 44 + data_size);
        }

        #[test]
        fn samples_stay_in_range() {
            for s in gen_sweep(700.0, 350.0).into_iter().chain(gen_lose()) {
                assert!((-1.0..=1.0).contains(&s));
            }
        }
    }
}

// ════════════════════════════════════════════════════════════
//  Public API: no-ops when the sound feature is off
// ════════════════════════════════════════════════════════════

#[cfg(feature = "sound")]
pub use inner::SoundEngine;

#[cfg(not(feature = "sound"))]
pub struct SoundEngine;

#[cfg(not(feature = "sound"))]
impl SoundEngine {
    pub fn new() -> Option<Self> { Some(SoundEngine) }
    pub fn play_intro_blip(&self, _frame: u16, _total: u16) {}
    pub fn play_too_high(&self) {}
    pub fn play_too_low(&self) {}
    pub fn play_win(&self) {}
    pub fn play_lose(&self) {}
}
