use std::path::Path;
use std::sync::Arc;

use candle_core::{DType, Device, IndexOp, Result, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config};

/// BERT encoder with a single-logit sequence-classification head.
///
/// Checkpoints exported under the `bert.*` or `roberta.*` weight namespaces
/// load transparently, as does a bare export. The head projects the CLS
/// token of the final hidden state down to one relevance logit.
struct SequenceClassifier {
    encoder: BertModel,
    head: Linear,
}

impl SequenceClassifier {
    fn load(vb: VarBuilder, config: &Config) -> Result<Self> {
        let encoder = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), config)?
        } else if vb.contains_tensor("roberta.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("roberta"), config)?
        } else {
            BertModel::load(vb.clone(), config)?
        };

        let head = candle_nn::linear(config.hidden_size, 1, vb.pp("classifier"))?;

        Ok(Self { encoder, head })
    }

    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        let hidden = self
            .encoder
            .forward(input_ids, token_type_ids, attention_mask)?;
        let cls = hidden.i((.., 0, ..))?;
        self.head.forward(&cls)
    }
}

/// Cheaply cloneable handle to a loaded classifier.
#[derive(Clone)]
pub struct BertClassifier(Arc<SequenceClassifier>);

impl BertClassifier {
    pub fn load(config_path: &Path, weights_path: &Path, device: &Device) -> Result<Self> {
        let raw = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| candle_core::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)?
        };

        Ok(Self(Arc::new(SequenceClassifier::load(vb, &config)?)))
    }

    /// One relevance logit per row of a `[batch, seq]` tokenized input.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.0.forward(input_ids, token_type_ids, attention_mask)
    }
}
