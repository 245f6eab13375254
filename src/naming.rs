// Province taxonomy: canonical keys, the short names the raw data reduces to,
// and the full display names used by the filtered province roll-up.
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Administrative tokens removed from a raw province name, in this order.
pub const STRIP_TOKENS: [&str; 6] = ["省", "市", "自治区", "回族", "维吾尔", "壮族"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Province {
    AnHui,
    AoMen,
    BeiJing,
    ChongQing,
    FuJian,
    GanSu,
    GuangDong,
    GuangXi,
    GuiZhou,
    HaiNan,
    HeBei,
    HeNan,
    HeiLongJiang,
    HuBei,
    HuNan,
    JiLin,
    JiangSu,
    JiangXi,
    LiaoNing,
    NeiMengGu,
    NingXia,
    QingHai,
    ShanDong,
    ShanXi,
    ShaanXi,
    ShangHai,
    SiChuan,
    TaiWan,
    TianJin,
    XiZang,
    XiangGang,
    XinJiang,
    YunNan,
    ZheJiang,
}

impl Province {
    pub const ALL: [Province; 34] = [
        Province::AnHui,
        Province::AoMen,
        Province::BeiJing,
        Province::ChongQing,
        Province::FuJian,
        Province::GanSu,
        Province::GuangDong,
        Province::GuangXi,
        Province::GuiZhou,
        Province::HaiNan,
        Province::HeBei,
        Province::HeNan,
        Province::HeiLongJiang,
        Province::HuBei,
        Province::HuNan,
        Province::JiLin,
        Province::JiangSu,
        Province::JiangXi,
        Province::LiaoNing,
        Province::NeiMengGu,
        Province::NingXia,
        Province::QingHai,
        Province::ShanDong,
        Province::ShanXi,
        Province::ShaanXi,
        Province::ShangHai,
        Province::SiChuan,
        Province::TaiWan,
        Province::TianJin,
        Province::XiZang,
        Province::XiangGang,
        Province::XinJiang,
        Province::YunNan,
        Province::ZheJiang,
    ];

    /// Machine-safe identifier, also the city table's file stem.
    ///
    /// 山西 and 陕西 share a pinyin spelling and are told apart by tone.
    pub fn key(self) -> &'static str {
        match self {
            Province::AnHui => "an_hui",
            Province::AoMen => "ao_men",
            Province::BeiJing => "bei_jing",
            Province::ChongQing => "chong_qing",
            Province::FuJian => "fu_jian",
            Province::GanSu => "gan_su",
            Province::GuangDong => "guang_dong",
            Province::GuangXi => "guang_xi",
            Province::GuiZhou => "gui_zhou",
            Province::HaiNan => "hai_nan",
            Province::HeBei => "he_bei",
            Province::HeNan => "he_nan",
            Province::HeiLongJiang => "hei_long_jiang",
            Province::HuBei => "hu_bei",
            Province::HuNan => "hu_nan",
            Province::JiLin => "ji_lin",
            Province::JiangSu => "jiang_su",
            Province::JiangXi => "jiang_xi",
            Province::LiaoNing => "liao_ning",
            Province::NeiMengGu => "nei_meng_gu",
            Province::NingXia => "ning_xia",
            Province::QingHai => "qing_hai",
            Province::ShanDong => "shan_dong",
            Province::ShanXi => "shan_xi_1",
            Province::ShaanXi => "shan_xi_3",
            Province::ShangHai => "shang_hai",
            Province::SiChuan => "si_chuan",
            Province::TaiWan => "tai_wan",
            Province::TianJin => "tian_jin",
            Province::XiZang => "xi_zang",
            Province::XiangGang => "xiang_gang",
            Province::XinJiang => "xin_jiang",
            Province::YunNan => "yun_nan",
            Province::ZheJiang => "zhe_jiang",
        }
    }

    /// Name left over once every strip token is removed.
    pub fn short_name(self) -> &'static str {
        match self {
            Province::AnHui => "安徽",
            Province::AoMen => "澳门",
            Province::BeiJing => "北京",
            Province::ChongQing => "重庆",
            Province::FuJian => "福建",
            Province::GanSu => "甘肃",
            Province::GuangDong => "广东",
            Province::GuangXi => "广西",
            Province::GuiZhou => "贵州",
            Province::HaiNan => "海南",
            Province::HeBei => "河北",
            Province::HeNan => "河南",
            Province::HeiLongJiang => "黑龙江",
            Province::HuBei => "湖北",
            Province::HuNan => "湖南",
            Province::JiLin => "吉林",
            Province::JiangSu => "江苏",
            Province::JiangXi => "江西",
            Province::LiaoNing => "辽宁",
            Province::NeiMengGu => "内蒙古",
            Province::NingXia => "宁夏",
            Province::QingHai => "青海",
            Province::ShanDong => "山东",
            Province::ShanXi => "山西",
            Province::ShaanXi => "陕西",
            Province::ShangHai => "上海",
            Province::SiChuan => "四川",
            Province::TaiWan => "台湾",
            Province::TianJin => "天津",
            Province::XiZang => "西藏",
            Province::XiangGang => "香港",
            Province::XinJiang => "新疆",
            Province::YunNan => "云南",
            Province::ZheJiang => "浙江",
        }
    }

    /// Display name as published in the raw data.
    pub fn full_name(self) -> &'static str {
        match self {
            Province::AnHui => "安徽省",
            Province::AoMen => "澳门",
            Province::BeiJing => "北京市",
            Province::ChongQing => "重庆市",
            Province::FuJian => "福建省",
            Province::GanSu => "甘肃省",
            Province::GuangDong => "广东省",
            Province::GuangXi => "广西壮族自治区",
            Province::GuiZhou => "贵州省",
            Province::HaiNan => "海南省",
            Province::HeBei => "河北省",
            Province::HeNan => "河南省",
            Province::HeiLongJiang => "黑龙江省",
            Province::HuBei => "湖北省",
            Province::HuNan => "湖南省",
            Province::JiLin => "吉林省",
            Province::JiangSu => "江苏省",
            Province::JiangXi => "江西省",
            Province::LiaoNing => "辽宁省",
            Province::NeiMengGu => "内蒙古自治区",
            Province::NingXia => "宁夏回族自治区",
            Province::QingHai => "青海省",
            Province::ShanDong => "山东省",
            Province::ShanXi => "山西省",
            Province::ShaanXi => "陕西省",
            Province::ShangHai => "上海市",
            Province::SiChuan => "四川省",
            Province::TaiWan => "台湾",
            Province::TianJin => "天津市",
            Province::XiZang => "西藏自治区",
            Province::XiangGang => "香港",
            Province::XinJiang => "新疆维吾尔自治区",
            Province::YunNan => "云南省",
            Province::ZheJiang => "浙江省",
        }
    }
}

static BY_SHORT_NAME: Lazy<HashMap<&'static str, Province>> =
    Lazy::new(|| Province::ALL.iter().map(|p| (p.short_name(), *p)).collect());

/// Removes every occurrence of each strip token, one token at a time.
pub fn strip_admin_suffixes(raw: &str) -> String {
    STRIP_TOKENS
        .iter()
        .fold(raw.to_string(), |acc, token| acc.replace(token, ""))
}

/// Canonical province for a raw display name, or `None` when the stripped
/// name is not in the taxonomy.
pub fn normalize_province(raw: &str) -> Option<Province> {
    BY_SHORT_NAME.get(strip_admin_suffixes(raw).as_str()).copied()
}

/// True when the raw name contains one of the full display names.
pub fn matches_known_full_name(raw: &str) -> bool {
    Province::ALL.iter().any(|p| raw.contains(p.full_name()))
}
