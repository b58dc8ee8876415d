use std::io::Cursor;

use binrw::BinReaderExt;
use binrw::{BinRead, BinWrite};
use serde::Serialize;
use simba_dtyp::{
    Decimal2NULL, Decimal5NULL, DoubleNULL, FixedStr, FlagsSet, MarketSegmentID, NegativePrices,
    SecurityAltIDSource, SecurityTradingStatus, TradingSessionID, Utf8Field, VarField,
};

use crate::error::{Result, SimbaDecodeError};
use crate::groups::read_group;
use crate::header::GroupSize;

/// Fixed-width preamble shared by every `SecurityDefinition` message,
/// preceding its five repeating groups and two trailing variable fields.
#[derive(BinRead, BinWrite, Debug, Clone, Serialize)]
pub struct SecurityDefinitionPreamble {
    pub tot_num_reports: u32,
    pub symbol: FixedStr<25>,
    pub security_id: i32,
    pub security_alt_id: FixedStr<25>,
    pub security_alt_id_source: SecurityAltIDSource,
    pub security_type: FixedStr<4>,
    pub cfi_code: FixedStr<6>,
    pub strike_price: Decimal5NULL,
    pub contract_multiplier: i32,
    pub security_trading_status: SecurityTradingStatus,
    pub currency: FixedStr<3>,
    pub market_segment_id: MarketSegmentID,
    pub trading_session_id: TradingSessionID,
    pub exchange_trading_session_id: i32,
    pub volatility: Decimal5NULL,
    pub high_limit_px: Decimal5NULL,
    pub low_limit_px: Decimal5NULL,
    pub min_price_increment: Decimal5NULL,
    pub min_price_increment_amount: Decimal5NULL,
    pub initial_margin_on_buy: Decimal2NULL,
    pub initial_margin_on_sell: Decimal2NULL,
    pub initial_margin_syntetic: Decimal2NULL,
    pub theor_price: Decimal5NULL,
    pub theor_price_limit: Decimal5NULL,
    pub underlying_qty: Decimal5NULL,
    pub underlying_currency: FixedStr<3>,
    pub maturity_date: u32,
    pub maturity_time: u32,
    pub flags: FlagsSet,
    pub min_price_increment_amount_curr: Decimal5NULL,
    pub settl_price_open: Decimal5NULL,
    pub valuation_method: FixedStr<4>,
    pub risk_free_rate: DoubleNULL,
    pub fixed_spot_discount: DoubleNULL,
    pub projected_spot_discount: DoubleNULL,
    pub settl_currency: FixedStr<3>,
    pub negative_prices: NegativePrices,
    pub derivative_contract_multiplier: i32,
    pub interest_rate_risk_up: DoubleNULL,
    pub interest_rate_risk_down: DoubleNULL,
    pub risk_free_rate2: DoubleNULL,
    pub interest_rate2_risk_up: DoubleNULL,
    pub interest_rate2_risk_down: DoubleNULL,
    pub settl_price: Decimal5NULL,
}

impl SecurityDefinitionPreamble {
    pub const WIRE_SIZE: usize = 290;
}

#[derive(BinRead, BinWrite, Debug, Clone, Serialize)]
pub struct MdFeedTypeEntry {
    pub md_feed_type: FixedStr<25>,
    pub market_depth: u32,
    pub md_book_type: u32,
}

#[derive(BinRead, BinWrite, Debug, Clone, Serialize)]
pub struct UnderlyingEntry {
    pub underlying_symbol: FixedStr<25>,
    pub underlying_board: FixedStr<4>,
    pub underlying_security_id: i32,
    pub underlying_future_id: i32,
}

#[derive(BinRead, BinWrite, Debug, Clone, Serialize)]
pub struct LegEntry {
    pub leg_symbol: FixedStr<25>,
    pub leg_security_id: i32,
    pub leg_ratio_qty: i32,
}

#[derive(BinRead, BinWrite, Debug, Clone, Serialize)]
pub struct InstrAttribEntry {
    pub instr_attrib_type: i32,
    pub instr_attrib_value: FixedStr<31>,
}

#[derive(BinRead, BinWrite, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventEntry {
    pub event_type: i32,
    pub event_date: u32,
    pub event_time: u64,
}

/// Template 18: full instrument definition.
///
/// Each of the five repeating groups is sized by its own `GroupSize`; none of
/// them borrow `no_md_feed_types.num_in_group`.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityDefinition {
    #[serde(flatten)]
    pub preamble: SecurityDefinitionPreamble,
    pub no_md_feed_types: GroupSize,
    pub md_feed_types: Vec<MdFeedTypeEntry>,
    pub no_underlyings: GroupSize,
    pub underlyings: Vec<UnderlyingEntry>,
    pub no_legs: GroupSize,
    pub legs: Vec<LegEntry>,
    pub no_instr_attrib: GroupSize,
    pub instr_attrib: Vec<InstrAttribEntry>,
    pub no_events: GroupSize,
    pub events: Vec<EventEntry>,
    pub security_desc: Utf8Field,
    pub quotation_list: VarField,
}

fn read_one_group<T>(
    cursor: &mut Cursor<&[u8]>,
    entry_wire_size: usize,
) -> Result<(GroupSize, Vec<T>)>
where
    T: for<'a> BinRead<Args<'a> = ()>,
{
    let offset = cursor.position() as usize;
    let size: GroupSize = cursor.read_le().map_err(|_| SimbaDecodeError::TruncatedPacket {
        offset,
        expected: GroupSize::WIRE_SIZE,
    })?;

    let offset = cursor.position() as usize;
    let entries = read_group(cursor, size.num_in_group as usize).map_err(|_| {
        SimbaDecodeError::TruncatedPacket {
            offset,
            expected: size.num_in_group as usize * entry_wire_size,
        }
    })?;

    Ok((size, entries))
}

pub(crate) fn read_security_definition(cursor: &mut Cursor<&[u8]>) -> Result<SecurityDefinition> {
    let offset = cursor.position() as usize;
    let preamble: SecurityDefinitionPreamble = cursor.read_le().map_err(|_| {
        SimbaDecodeError::TruncatedPacket {
            offset,
            expected: SecurityDefinitionPreamble::WIRE_SIZE,
        }
    })?;

    let (no_md_feed_types, md_feed_types) = read_one_group::<MdFeedTypeEntry>(cursor, 33)?;
    let (no_underlyings, underlyings) = read_one_group::<UnderlyingEntry>(cursor, 37)?;
    let (no_legs, legs) = read_one_group::<LegEntry>(cursor, 33)?;
    let (no_instr_attrib, instr_attrib) = read_one_group::<InstrAttribEntry>(cursor, 35)?;
    let (no_events, events) = read_one_group::<EventEntry>(cursor, 16)?;

    let offset = cursor.position() as usize;
    let security_desc: Utf8Field = cursor.read_le().map_err(|_| {
        SimbaDecodeError::TruncatedPacket { offset, expected: 2 }
    })?;

    let offset = cursor.position() as usize;
    let quotation_list: VarField = cursor.read_le().map_err(|_| {
        SimbaDecodeError::TruncatedPacket { offset, expected: 2 }
    })?;

    Ok(SecurityDefinition {
        preamble,
        no_md_feed_types,
        md_feed_types,
        no_underlyings,
        underlyings,
        no_legs,
        legs,
        no_instr_attrib,
        instr_attrib,
        no_events,
        events,
        security_desc,
        quotation_list,
    })
}
