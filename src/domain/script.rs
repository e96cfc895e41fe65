//! Lock and unlock script decoding.
//!
//! Disassembling script bytecode into opcodes belongs to the chain SDK. The
//! explorer only depends on the [`ScriptDecoder`] seam and ships a hex
//! fallback so scripts are still readable without the SDK.

use data_encoding::HEXLOWER;

/// Turns script bytecode into an ordered list of display tokens.
pub trait ScriptDecoder: Send + Sync {
    /// Decode `script` into tokens.
    fn tokens(&self, script: &[u8]) -> Vec<String>;

    /// Decode `script` and join the tokens with single spaces.
    fn render(&self, script: &[u8]) -> String {
        self.tokens(script).join(" ")
    }
}

/// Fallback decoder that shows the whole script as one `0x...` token.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexScriptDecoder;

impl ScriptDecoder for HexScriptDecoder {
    fn tokens(&self, script: &[u8]) -> Vec<String> {
        if script.is_empty() {
            return Vec::new();
        }
        vec![format!("0x{}", HEXLOWER.encode(script))]
    }
}
