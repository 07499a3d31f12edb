use once_cell::sync::Lazy;

use super::layout::StaticLayout;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub static LLAMA: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "LlamaForCausalLM",
    pre_weight_names: names(&["model.embed_tokens.weight"]),
    post_weight_names: names(&["model.norm.weight", "lm_head.weight"]),
    embed_weight_names: names(&["model.embed_tokens.weight", "lm_head.weight"]),
    layer_prefix: "model.layers".to_string(),
    layer_weight_suffixes: names(&[
        "input_layernorm.weight",
        "mlp.up_proj.weight",
        "mlp.down_proj.weight",
        "mlp.gate_proj.weight",
        "post_attention_layernorm.weight",
        "self_attn.q_proj.weight",
        "self_attn.k_proj.weight",
        "self_attn.v_proj.weight",
        "self_attn.o_proj.weight",
    ]),
    num_layers_key: None,
});

pub static MISTRAL: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "MistralForCausalLM",
    ..LLAMA.clone()
});

pub static STABLELM: Lazy<StaticLayout> = Lazy::new(|| {
    let base = LLAMA.clone();
    StaticLayout {
        name: "StableLMEpochForCausalLM",
        post_weight_names: [base.post_weight_names.clone(), names(&["model.norm.bias"])].concat(),
        layer_weight_suffixes: [
            base.layer_weight_suffixes.clone(),
            names(&["input_layernorm.bias", "post_attention_layernorm.bias"]),
        ]
        .concat(),
        ..base
    }
});

pub static GPT_NEOX: Lazy<StaticLayout> = Lazy::new(|| {
    let mut suffixes: Vec<String> = [
        "attention.dense",
        "attention.query_key_value",
        "input_layernorm",
        "mlp.dense_4h_to_h",
        "mlp.dense_h_to_4h",
        "post_attention_layernorm",
    ]
    .iter()
    .flat_map(|prefix| [format!("{prefix}.weight"), format!("{prefix}.bias")])
    .collect();
    suffixes.extend(names(&[
        "attention.bias",
        "attention.masked_bias",
        "attention.rotary_emb.inv_freq",
    ]));
    StaticLayout {
        name: "GPTNeoXForCausalLM",
        pre_weight_names: names(&["gpt_neox.embed_in.weight"]),
        post_weight_names: names(&[
            "gpt_neox.final_layer_norm.bias",
            "gpt_neox.final_layer_norm.weight",
            "embed_out.weight",
        ]),
        embed_weight_names: names(&["gpt_neox.embed_in.weight", "embed_out.weight"]),
        layer_prefix: "gpt_neox.layers".to_string(),
        layer_weight_suffixes: suffixes,
        num_layers_key: None,
    }
});

pub static GPT2: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "GPT2LMHeadModel",
    pre_weight_names: names(&["wte.weight", "wpe.weight"]),
    post_weight_names: names(&["ln_f.weight", "ln_f.bias"]),
    embed_weight_names: names(&["wte.weight"]),
    layer_prefix: "h".to_string(),
    layer_weight_suffixes: names(&[
        "attn.c_attn.weight",
        "attn.c_attn.bias",
        "attn.c_proj.weight",
        "attn.c_proj.bias",
        "ln_1.weight",
        "ln_1.bias",
        "ln_2.weight",
        "ln_2.bias",
        "mlp.c_proj.weight",
        "mlp.c_proj.bias",
        "mlp.c_fc.weight",
        "mlp.c_fc.bias",
        // mlp.c_proj appears twice in this table; checkpoint alignment depends on both entries
        "mlp.c_proj.weight",
        "mlp.c_proj.bias",
    ]),
    num_layers_key: Some("n_layer"),
});

pub static JAIS: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "JAISLMHeadModel",
    pre_weight_names: names(&["transformer.wte.weight", "transformer.relative_pe.slopes"]),
    post_weight_names: names(&["transformer.ln_f.weight", "transformer.ln_f.bias"]),
    embed_weight_names: names(&["transformer.wte.weight"]),
    layer_prefix: "transformer.h".to_string(),
    layer_weight_suffixes: names(&[
        "attn.c_attn.weight",
        "attn.c_attn.bias",
        "attn.c_proj.weight",
        "attn.c_proj.bias",
        "ln_1.weight",
        "ln_1.bias",
        "ln_2.weight",
        "ln_2.bias",
        "mlp.c_fc.weight",
        "mlp.c_fc.bias",
        "mlp.c_fc2.weight",
        "mlp.c_fc2.bias",
        "mlp.c_proj.weight",
        "mlp.c_proj.bias",
    ]),
    num_layers_key: Some("n_layer"),
});

pub static GPT2_SEQCLASS: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "GPT2ForSequenceClassification",
    pre_weight_names: names(&["transformer.wte.weight", "transformer.wpe.weight"]),
    post_weight_names: names(&[
        "transformer.ln_f.weight",
        "transformer.ln_f.bias",
        "score.weight",
    ]),
    embed_weight_names: GPT2.embed_weight_names.clone(),
    layer_prefix: "transformer.h".to_string(),
    layer_weight_suffixes: GPT2.layer_weight_suffixes.clone(),
    num_layers_key: GPT2.num_layers_key,
});

pub static QWEN: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "QWenLMHeadModel",
    pre_weight_names: names(&["transformer.wte.weight"]),
    post_weight_names: names(&["transformer.ln_f.weight", "lm_head.weight"]),
    embed_weight_names: names(&["transformer.wte.weight", "lm_head.weight"]),
    layer_prefix: "transformer.h".to_string(),
    layer_weight_suffixes: names(&[
        "attn.c_attn.bias",
        "attn.c_attn.weight",
        "attn.c_proj.weight",
        "ln_1.weight",
        "ln_2.weight",
        "mlp.c_proj.weight",
        "mlp.w1.weight",
        "mlp.w2.weight",
    ]),
    num_layers_key: None,
});

pub static CHATGLM: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "ChatGLMModel",
    pre_weight_names: names(&[
        "transformer.embedding.word_embeddings.weight",
        "transformer.rotary_pos_emb.inv_freq",
    ]),
    post_weight_names: names(&[
        "transformer.encoder.final_layernorm.weight",
        "transformer.output_layer.weight",
    ]),
    embed_weight_names: names(&[
        "transformer.embedding.word_embeddings.weight",
        "transformer.output_layer.weight",
    ]),
    layer_prefix: "transformer.encoder.layers".to_string(),
    layer_weight_suffixes: names(&[
        "input_layernorm.weight",
        "mlp.dense_4h_to_h.weight",
        "mlp.dense_h_to_4h.weight",
        "post_attention_layernorm.weight",
        "self_attention.dense.weight",
        "self_attention.query_key_value.bias",
        "self_attention.query_key_value.weight",
    ]),
    num_layers_key: None,
});

pub static FALCON: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "FalconForCausalLM",
    pre_weight_names: names(&["transformer.word_embeddings.weight"]),
    post_weight_names: names(&[
        "transformer.ln_f.weight",
        "transformer.ln_f.bias",
        "lm_head.weight",
    ]),
    embed_weight_names: names(&["transformer.word_embeddings.weight", "lm_head.weight"]),
    layer_prefix: "transformer.h".to_string(),
    layer_weight_suffixes: names(&[
        "ln_attn.bias",
        "ln_attn.weight",
        "ln_mlp.bias",
        "ln_mlp.weight",
        "mlp.dense_4h_to_h.weight",
        "mlp.dense_h_to_4h.weight",
        "self_attention.dense.weight",
        "self_attention.query_key_value.weight",
    ]),
    num_layers_key: None,
});

/// Phi checkpoints in the legacy Microsoft layout; shares its declared
/// architecture name with [`PHI`] and is told apart by `model_type`.
pub static PHI_MSFT: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "PhiForCausalLM",
    pre_weight_names: names(&["transformer.embd.wte.weight"]),
    post_weight_names: names(&[
        "lm_head.linear.bias",
        "lm_head.linear.weight",
        "lm_head.ln.bias",
        "lm_head.ln.weight",
    ]),
    embed_weight_names: names(&["lm_head.linear.weight", "transformer.embd.wte.weight"]),
    layer_prefix: "transformer.h".to_string(),
    layer_weight_suffixes: names(&[
        "ln.bias",
        "ln.weight",
        "mixer.out_proj.bias",
        "mixer.out_proj.weight",
        "mixer.Wqkv.bias",
        "mixer.Wqkv.weight",
        "mlp.fc1.bias",
        "mlp.fc1.weight",
        "mlp.fc2.bias",
        "mlp.fc2.weight",
    ]),
    num_layers_key: Some("n_layer"),
});

/// Phi checkpoints in the transformers-native layout.
pub static PHI: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "PhiForCausalLM",
    pre_weight_names: names(&["model.embed_tokens.weight"]),
    post_weight_names: names(&[
        "lm_head.bias",
        "lm_head.weight",
        "model.final_layernorm.bias",
        "model.final_layernorm.weight",
    ]),
    embed_weight_names: names(&["lm_head.weight", "model.embed_tokens.weight"]),
    layer_prefix: "model.layers".to_string(),
    layer_weight_suffixes: names(&[
        "input_layernorm.bias",
        "input_layernorm.weight",
        "self_attn.dense.bias",
        "self_attn.dense.weight",
        "self_attn.q_proj.bias",
        "self_attn.q_proj.weight",
        "self_attn.k_proj.bias",
        "self_attn.k_proj.weight",
        "self_attn.v_proj.bias",
        "self_attn.v_proj.weight",
        "mlp.fc1.bias",
        "mlp.fc1.weight",
        "mlp.fc2.bias",
        "mlp.fc2.weight",
    ]),
    num_layers_key: None,
});

pub static BAICHUAN: Lazy<StaticLayout> = Lazy::new(|| StaticLayout {
    name: "BaichuanForCausalLM",
    pre_weight_names: names(&["model.embed_tokens.weight"]),
    post_weight_names: names(&["model.norm.weight", "lm_head.weight"]),
    embed_weight_names: names(&["model.embed_tokens.weight", "lm_head.weight"]),
    layer_prefix: "model.layers".to_string(),
    layer_weight_suffixes: names(&[
        "input_layernorm.weight",
        "self_attn.W_pack.weight",
        "self_attn.o_proj.weight",
        "post_attention_layernorm.weight",
        "mlp.gate_proj.weight",
        "mlp.down_proj.weight",
        "mlp.up_proj.weight",
    ]),
    num_layers_key: None,
});
