use crate::options::Options;
use crate::registry::{Mode, ModeInstance, RegistryBuilder};
use cipherkit_algorithms::{
    Cbc, Cfb, Ctr, Eax, Ecb, Gofb, GostCbc, GostCfb, GostOfb, Mgm, Ncfb, Nofb, Ocb, Ofb,
};
use cipherkit_api::{validate, BlockCipher, Result};

type Cipher = Box<dyn BlockCipher>;

fn iv<'a>(context: &'static str, options: &'a Options) -> Result<&'a [u8]> {
    validate::required_iv(context, options.iv())
}

fn segment_bits(cipher: &Cipher, options: &Options) -> usize {
    options
        .config()
        .bit_block_size
        .unwrap_or(cipher.block_size() * 8)
}

fn tag_size(cipher: &Cipher, options: &Options) -> usize {
    options.config().tag_size.unwrap_or(cipher.block_size())
}

fn ecb(cipher: Cipher, _: &Options) -> Result<ModeInstance> {
    Ok(ModeInstance::Block(Box::new(Ecb::new(cipher))))
}

fn cbc(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let iv = iv("CBC", options)?;
    Ok(ModeInstance::Block(Box::new(Cbc::new(cipher, iv)?)))
}

fn gost_cbc(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let iv = iv("GOST CBC", options)?;
    Ok(ModeInstance::Block(Box::new(GostCbc::new(cipher, iv)?)))
}

fn cfb(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let iv = iv("CFB", options)?;
    Ok(ModeInstance::Stream(Box::new(Cfb::new(cipher, iv)?)))
}

/// CFB with a fixed segment width
fn cfb_bits(bits: usize) -> impl Fn(Cipher, &Options) -> Result<ModeInstance> + Send + Sync {
    move |cipher: Cipher, options: &Options| {
        let iv = iv("CFB", options)?;
        Ok(ModeInstance::Stream(Box::new(Cfb::with_segment_bits(
            cipher, iv, bits,
        )?)))
    }
}

fn cfbn(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let bits = segment_bits(&cipher, options);
    let iv = iv("CFB", options)?;
    Ok(ModeInstance::Stream(Box::new(Cfb::with_segment_bits(
        cipher, iv, bits,
    )?)))
}

fn ncfb(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let iv = iv("NCFB", options)?;
    Ok(ModeInstance::Stream(Box::new(Ncfb::new(cipher, iv)?)))
}

fn ofb(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let iv = iv("OFB", options)?;
    Ok(ModeInstance::Stream(Box::new(Ofb::new(cipher, iv)?)))
}

fn ofb8(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let iv = iv("OFB", options)?;
    Ok(ModeInstance::Stream(Box::new(Ofb::ofb8(cipher, iv)?)))
}

fn nofb(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let iv = iv("NOFB", options)?;
    Ok(ModeInstance::Stream(Box::new(Nofb::new(cipher, iv)?)))
}

fn ctr(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let iv = iv("CTR", options)?;
    Ok(ModeInstance::Stream(Box::new(Ctr::new(cipher, iv)?)))
}

fn gofb(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let iv = iv("GOFB", options)?;
    Ok(ModeInstance::Stream(Box::new(Gofb::new(cipher, iv)?)))
}

fn gost_cfb(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let bits = segment_bits(&cipher, options);
    let iv = iv("GOST CFB", options)?;
    Ok(ModeInstance::Stream(Box::new(GostCfb::with_segment_bits(
        cipher, iv, bits,
    )?)))
}

fn gost_ofb(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let iv = iv("GOST OFB", options)?;
    Ok(ModeInstance::Stream(Box::new(GostOfb::new(cipher, iv)?)))
}

fn eax(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let tag = tag_size(&cipher, options);
    let nonce = iv("EAX", options)?;
    Ok(ModeInstance::Aead(Box::new(Eax::new(cipher, nonce, tag)?)))
}

fn ocb(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let tag = tag_size(&cipher, options);
    let nonce = iv("OCB", options)?;
    Ok(ModeInstance::Aead(Box::new(Ocb::new(cipher, nonce, tag)?)))
}

fn ocb3(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let tag = tag_size(&cipher, options);
    let nonce = iv("OCB3", options)?;
    Ok(ModeInstance::Aead(Box::new(Ocb::new_ocb3(cipher, nonce, tag)?)))
}

fn mgm(cipher: Cipher, options: &Options) -> Result<ModeInstance> {
    let tag = tag_size(&cipher, options);
    let nonce = iv("MGM", options)?;
    Ok(ModeInstance::Aead(Box::new(Mgm::new(cipher, nonce, tag)?)))
}

pub(super) fn register(builder: &RegistryBuilder) {
    builder
        .add_mode(Mode::ECB, || "ECB".into(), ecb)
        .add_mode(Mode::CBC, || "CBC".into(), cbc)
        .add_mode(Mode::CFB, || "CFB".into(), cfb)
        .add_mode(Mode::CFB8, || "CFB8".into(), cfb_bits(8))
        .add_mode(Mode::CFB16, || "CFB16".into(), cfb_bits(16))
        .add_mode(Mode::CFB32, || "CFB32".into(), cfb_bits(32))
        .add_mode(Mode::CFB64, || "CFB64".into(), cfb_bits(64))
        .add_mode(Mode::CFB128, || "CFB128".into(), cfb_bits(128))
        .add_mode(Mode::CFBN, || "CFBN".into(), cfbn)
        .add_mode(Mode::OFB, || "OFB".into(), ofb)
        .add_mode(Mode::OFB8, || "OFB8".into(), ofb8)
        .add_mode(Mode::NOFB, || "NOFB".into(), nofb)
        .add_mode(Mode::NCFB, || "NCFB".into(), ncfb)
        .add_mode(Mode::CTR, || "CTR".into(), ctr)
        .add_mode(Mode::GOFB, || "GOFB".into(), gofb)
        .add_mode(Mode::GOST_CBC, || "GOST CBC".into(), gost_cbc)
        .add_mode(Mode::GOST_CFB, || "GOST CFB".into(), gost_cfb)
        .add_mode(Mode::GOST_OFB, || "GOST OFB".into(), gost_ofb)
        .add_mode(Mode::EAX, || "EAX".into(), eax)
        .add_mode(Mode::OCB, || "OCB".into(), ocb)
        .add_mode(Mode::OCB3, || "OCB3".into(), ocb3)
        .add_mode(Mode::MGM, || "MGM".into(), mgm);
}
