// ==========================================
// 商品目录导入系统 - 源映射声明
// ==========================================
// 职责: 每个源一份静态列绑定声明（按列名或按列下标），
//       连同分隔符与表头有无，供文件解析器执行
// 红线: 分隔符逐源显式声明，绝不探测推断
// ==========================================

/// 列引用方式
///
/// 不同投递方的同类数据采用不同约定：商品/库存源按列名绑定，
/// 价格源的一个变体按列下标绑定（且无表头行）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef {
    /// 按列名绑定（表头匹配不区分大小写）
    Name(&'static str),
    /// 按列下标绑定（0 起）
    Index(usize),
}

/// 单个 CSV 源的映射声明
#[derive(Debug, Clone, Copy)]
pub struct FeedSpec {
    /// 源标识，用于诊断与日志
    pub label: &'static str,
    /// 字段分隔符
    pub delimiter: u8,
    /// 首行是否为表头
    pub has_headers: bool,
    /// (规范字段名, 列引用) 绑定表
    pub columns: &'static [(&'static str, ColumnRef)],
}

// ==========================================
// 三个源的静态声明
// ==========================================

/// 商品源: 分号分隔、带表头、按列名绑定
pub const PRODUCT_FEED: FeedSpec = FeedSpec {
    label: "Products",
    delimiter: b';',
    has_headers: true,
    columns: &[
        ("sku", ColumnRef::Name("sku")),
        ("name", ColumnRef::Name("name")),
        ("ean", ColumnRef::Name("ean")),
        ("producer_name", ColumnRef::Name("producer_name")),
        ("category", ColumnRef::Name("category")),
        ("is_wire", ColumnRef::Name("is_wire")),
        ("shipping", ColumnRef::Name("shipping")),
        ("available", ColumnRef::Name("available")),
        ("default_image", ColumnRef::Name("default_image")),
    ],
};

/// 库存源: 逗号分隔、带表头、按列名绑定
pub const INVENTORY_FEED: FeedSpec = FeedSpec {
    label: "Inventory",
    delimiter: b',',
    has_headers: true,
    columns: &[
        ("sku", ColumnRef::Name("sku")),
        ("unit", ColumnRef::Name("unit")),
        ("qty", ColumnRef::Name("qty")),
        ("manufacturer_name", ColumnRef::Name("manufacturer_name")),
        ("manufacturer_ref_num", ColumnRef::Name("manufacturer_ref_num")),
        ("shipping", ColumnRef::Name("shipping")),
        ("shipping_cost", ColumnRef::Name("shipping_cost")),
    ],
};

/// 价格源变体一: 逗号分隔、无表头、按列下标绑定
pub const PRICE_FEED_POSITIONAL: FeedSpec = FeedSpec {
    label: "Prices",
    delimiter: b',',
    has_headers: false,
    columns: &[
        ("sku", ColumnRef::Index(1)),
        ("net_price", ColumnRef::Index(3)),
    ],
};

/// 价格源变体二: 逗号分隔、带表头、按列名绑定
pub const PRICE_FEED_NAMED: FeedSpec = FeedSpec {
    label: "Prices",
    delimiter: b',',
    has_headers: true,
    columns: &[
        ("sku", ColumnRef::Name("sku")),
        ("net_price", ColumnRef::Name("net_price")),
    ],
};
