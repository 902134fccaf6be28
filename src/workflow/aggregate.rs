use super::router::Tone;

/// First present value, in iteration order.
pub fn coalesce<I>(outputs: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    outputs.into_iter().flatten().next()
}

/// Optional outputs of the three response generators for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchOutputs {
    pub happy: Option<String>,
    pub sad: Option<String>,
    pub angry: Option<String>,
}

impl BranchOutputs {
    pub fn set(&mut self, tone: Tone, text: String) {
        let slot = match tone {
            Tone::Happy => &mut self.happy,
            Tone::Sad => &mut self.sad,
            Tone::Angry => &mut self.angry,
        };
        *slot = Some(text);
    }

    /// Coalesce in router priority order: happy, sad, angry.
    pub fn response(&self) -> Option<String> {
        coalesce([self.happy.clone(), self.sad.clone(), self.angry.clone()])
    }
}
